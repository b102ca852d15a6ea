//! Parameter — a named, typed, boundable value slot owned by a device.

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, ValidationError};
use crate::value::{ParamValue, ValueKind};
use crate::write::RejectReason;

/// Well-known parameter names shared by device construction and driver
/// routing.
pub mod names {
    pub const NAME: &str = "Name";
    pub const POWER: &str = "Power";
    pub const BRIGHTNESS: &str = "Brightness";
    pub const HUE: &str = "Hue";
    pub const SATURATION: &str = "Saturation";
    pub const TEMPERATURE: &str = "Temperature";
    pub const TEMPERATURE_SET: &str = "Temperature Set";
}

/// Read/write access flags for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    pub readable: bool,
    pub writable: bool,
}

impl Access {
    pub const READ_ONLY: Self = Self {
        readable: true,
        writable: false,
    };
    pub const READ_WRITE: Self = Self {
        readable: true,
        writable: true,
    };
}

impl Default for Access {
    fn default() -> Self {
        Self::READ_WRITE
    }
}

/// Inclusive numeric bounds for an integer parameter.
///
/// `step` is the UI slider increment; writes are checked against
/// `min`/`max` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl Bounds {
    /// Create bounds with the given limits and slider step.
    #[must_use]
    pub fn new(min: i64, max: i64, step: i64) -> Self {
        Self { min, max, step }
    }

    /// Whether `value` falls within `min..=max`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Rendering hint for clients. Carries no logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiHint {
    Toggle,
    Slider,
    Text,
}

/// A named, typed value slot belonging to exactly one device.
///
/// The stored value only ever changes through accepted writes, so it always
/// satisfies the slot's declared type and bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: ParamValue,
    pub access: Access,
    pub bounds: Option<Bounds>,
    pub ui_hint: Option<UiHint>,
}

impl Parameter {
    /// Create a builder for constructing a [`Parameter`].
    #[must_use]
    pub fn builder() -> ParameterBuilder {
        ParameterBuilder::default()
    }

    /// The declared value type of this slot.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when the name is empty, bounds
    /// are declared on a non-integer slot, bounds are malformed, or the
    /// initial value violates them.
    pub fn validate(&self) -> Result<(), HearthError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyParamName.into());
        }
        if let Some(bounds) = &self.bounds {
            if self.value.kind() != ValueKind::Int {
                return Err(ValidationError::BoundsOnNonInteger.into());
            }
            if bounds.min > bounds.max || bounds.step <= 0 {
                return Err(ValidationError::InvalidBounds.into());
            }
            if let Some(value) = self.value.as_int() {
                if !bounds.contains(value) {
                    return Err(ValidationError::InitialValueOutOfBounds.into());
                }
            }
        }
        Ok(())
    }

    /// Check whether a proposed write may be committed to this slot.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectReason`] when the slot is not writable, the
    /// proposed value's type does not match the declared type, or a numeric
    /// value violates the declared bounds.
    pub fn check_write(&self, proposed: &ParamValue) -> Result<(), RejectReason> {
        if !self.access.writable {
            return Err(RejectReason::NotWritable);
        }
        if proposed.kind() != self.value.kind() {
            return Err(RejectReason::TypeMismatch {
                expected: self.value.kind(),
                got: proposed.kind(),
            });
        }
        if let (Some(bounds), Some(value)) = (&self.bounds, proposed.as_int()) {
            if !bounds.contains(value) {
                return Err(RejectReason::OutOfBounds {
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Parameter`].
#[derive(Debug, Default)]
pub struct ParameterBuilder {
    name: Option<String>,
    value: Option<ParamValue>,
    access: Option<Access>,
    bounds: Option<Bounds>,
    ui_hint: Option<UiHint>,
}

impl ParameterBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: ParamValue) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }

    #[must_use]
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn ui_hint(mut self, ui_hint: UiHint) -> Self {
        self.ui_hint = Some(ui_hint);
        self
    }

    /// Consume the builder, validate, and return a [`Parameter`].
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if invariants fail.
    pub fn build(self) -> Result<Parameter, HearthError> {
        let param = Parameter {
            name: self.name.unwrap_or_default(),
            value: self.value.unwrap_or(ParamValue::Bool(false)),
            access: self.access.unwrap_or_default(),
            bounds: self.bounds,
            ui_hint: self.ui_hint,
        };
        param.validate()?;
        Ok(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setpoint() -> Parameter {
        Parameter::builder()
            .name(names::TEMPERATURE_SET)
            .value(ParamValue::Int(20))
            .bounds(Bounds::new(15, 30, 1))
            .ui_hint(UiHint::Slider)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_parameter_with_defaults() {
        let param = Parameter::builder()
            .name(names::POWER)
            .value(ParamValue::Bool(false))
            .build()
            .unwrap();
        assert_eq!(param.name, "Power");
        assert_eq!(param.access, Access::READ_WRITE);
        assert!(param.bounds.is_none());
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Parameter::builder().value(ParamValue::Bool(true)).build();
        assert!(matches!(
            result,
            Err(HearthError::Validation(ValidationError::EmptyParamName))
        ));
    }

    #[test]
    fn should_reject_bounds_on_boolean_parameter() {
        let result = Parameter::builder()
            .name(names::POWER)
            .value(ParamValue::Bool(false))
            .bounds(Bounds::new(0, 1, 1))
            .build();
        assert!(matches!(
            result,
            Err(HearthError::Validation(ValidationError::BoundsOnNonInteger))
        ));
    }

    #[test]
    fn should_reject_inverted_bounds() {
        let result = Parameter::builder()
            .name(names::BRIGHTNESS)
            .value(ParamValue::Int(50))
            .bounds(Bounds::new(100, 0, 1))
            .build();
        assert!(matches!(
            result,
            Err(HearthError::Validation(ValidationError::InvalidBounds))
        ));
    }

    #[test]
    fn should_reject_initial_value_outside_bounds() {
        let result = Parameter::builder()
            .name(names::TEMPERATURE_SET)
            .value(ParamValue::Int(40))
            .bounds(Bounds::new(15, 30, 1))
            .build();
        assert!(matches!(
            result,
            Err(HearthError::Validation(
                ValidationError::InitialValueOutOfBounds
            ))
        ));
    }

    #[test]
    fn should_accept_write_matching_type_and_bounds() {
        let param = setpoint();
        assert!(param.check_write(&ParamValue::Int(22)).is_ok());
    }

    #[test]
    fn should_accept_write_at_bounds_edges() {
        let param = setpoint();
        assert!(param.check_write(&ParamValue::Int(15)).is_ok());
        assert!(param.check_write(&ParamValue::Int(30)).is_ok());
    }

    #[test]
    fn should_reject_write_outside_bounds() {
        let param = setpoint();
        assert_eq!(
            param.check_write(&ParamValue::Int(45)),
            Err(RejectReason::OutOfBounds { min: 15, max: 30 })
        );
    }

    #[test]
    fn should_reject_write_with_mismatched_type() {
        let param = setpoint();
        assert_eq!(
            param.check_write(&ParamValue::String("warm".to_string())),
            Err(RejectReason::TypeMismatch {
                expected: ValueKind::Int,
                got: ValueKind::String,
            })
        );
    }

    #[test]
    fn should_reject_write_to_read_only_parameter() {
        let param = Parameter::builder()
            .name(names::TEMPERATURE)
            .value(ParamValue::Int(20))
            .access(Access::READ_ONLY)
            .ui_hint(UiHint::Text)
            .build()
            .unwrap();
        assert_eq!(
            param.check_write(&ParamValue::Int(25)),
            Err(RejectReason::NotWritable)
        );
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let param = setpoint();
        let json = serde_json::to_string(&param).unwrap();
        let parsed: Parameter = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, param);
    }
}
