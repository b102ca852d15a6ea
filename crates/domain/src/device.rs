//! Device — a logical grouping of controllable parameters.
//!
//! Devices are constructed once at startup by the node's registration glue
//! and live for the whole process. Their parameter list is ordered and
//! fixed; only parameter *values* change afterwards, through accepted
//! writes.

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, NotFoundError, ValidationError};
use crate::id::DeviceId;
use crate::param::Parameter;
use crate::value::ParamValue;

/// The device archetype, which determines its driver routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Lightbulb,
    Switch,
    Thermostat,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lightbulb => f.write_str("lightbulb"),
            Self::Switch => f.write_str("switch"),
            Self::Thermostat => f.write_str("thermostat"),
        }
    }
}

/// A named grouping of parameters (e.g. a lightbulb).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub params: Vec<Parameter>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when the name is empty, a
    /// parameter is invalid, or two parameters share a name.
    pub fn validate(&self) -> Result<(), HearthError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        for (index, param) in self.params.iter().enumerate() {
            param.validate()?;
            if self.params[..index].iter().any(|p| p.name == param.name) {
                return Err(ValidationError::DuplicateParam(param.name.clone()).into());
            }
        }
        Ok(())
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Overwrite a parameter's stored value.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when the device has no parameter
    /// with that name.
    pub fn set_value(&mut self, name: &str, value: ParamValue) -> Result<(), HearthError> {
        let param = self
            .params
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| NotFoundError {
                entity: "Parameter",
                id: format!("{}/{name}", self.name),
            })?;
        param.value = value;
        Ok(())
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    kind: Option<DeviceKind>,
    params: Vec<Parameter>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Append a parameter, preserving declaration order.
    #[must_use]
    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if the kind is missing or
    /// invariants fail.
    pub fn build(self) -> Result<Device, HearthError> {
        let device = Device {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            kind: self.kind.ok_or(ValidationError::MissingKind)?,
            params: self.params,
        };
        device.validate()?;
        Ok(device)
    }
}
