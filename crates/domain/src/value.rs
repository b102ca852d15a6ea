//! Typed parameter values.

use serde::{Deserialize, Serialize};

/// A single typed parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl ParamValue {
    /// The type of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
        }
    }

    /// The boolean payload, if this is a [`Bool`](Self::Bool).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer payload, if this is an [`Int`](Self::Int).
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }
}

/// The type of a [`ParamValue`], used for declaring parameter slots and
/// reporting mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    String,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::String => f.write_str("string"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_bool_variant_as_plain_bool() {
        let val = ParamValue::Bool(true);
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "true");
    }

    #[test]
    fn should_serialize_int_variant_as_number() {
        let val = ParamValue::Int(80);
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "80");
    }

    #[test]
    fn should_deserialize_integer_as_int_variant() {
        let val: ParamValue = serde_json::from_str("42").unwrap();
        assert_eq!(val, ParamValue::Int(42));
    }

    #[test]
    fn should_deserialize_fraction_as_float_variant() {
        let val: ParamValue = serde_json::from_str("21.5").unwrap();
        assert_eq!(val, ParamValue::Float(21.5));
    }

    #[test]
    fn should_report_kind_for_each_variant() {
        assert_eq!(ParamValue::Bool(false).kind(), ValueKind::Bool);
        assert_eq!(ParamValue::Int(1).kind(), ValueKind::Int);
        assert_eq!(ParamValue::Float(0.5).kind(), ValueKind::Float);
        assert_eq!(
            ParamValue::String("x".to_string()).kind(),
            ValueKind::String
        );
    }

    #[test]
    fn should_extract_bool_payload() {
        assert_eq!(ParamValue::Bool(true).as_bool(), Some(true));
        assert_eq!(ParamValue::Int(1).as_bool(), None);
    }

    #[test]
    fn should_extract_int_payload() {
        assert_eq!(ParamValue::Int(22).as_int(), Some(22));
        assert_eq!(ParamValue::Bool(true).as_int(), None);
    }

    #[test]
    fn should_display_lowercase_kind_names() {
        assert_eq!(ValueKind::Bool.to_string(), "bool");
        assert_eq!(ValueKind::Int.to_string(), "int");
    }
}
