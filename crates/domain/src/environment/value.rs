//! Environment value types

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// A numeric environment value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A signed integer.
    Integer(i64),
    /// An unsigned integer too large for `i64`.
    Unsigned(u64),
    /// A floating point number.
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

/// A dynamically typed environment value.
///
/// Only `String`, `Number` and `Boolean` can be substituted into a template.
/// `Null` behaves like a missing variable, and `Other` is always rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Value {
    /// A string value, substituted as-is.
    String(String),
    /// A numeric value.
    Number(Number),
    /// A boolean value, substituted as `true` or `false`.
    Boolean(bool),
    /// An explicit null.
    Null,
    /// Any non-primitive value; the payload names its kind.
    Other(String),
}

impl Value {
    /// Returns true for strings, numbers and booleans.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::String(_) | Self::Number(_) | Self::Boolean(_))
    }

    /// Returns true for `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the substitution text for primitive values.
    #[must_use]
    pub fn to_substitution(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::Boolean(b) => Some(b.to_string()),
            Self::Null | Self::Other(_) => None,
        }
    }

    /// Short name of the value's kind, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
            Self::Other(kind) => kind,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(Number::Integer(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(Number::Integer(i64::from(value)))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Number(Number::Unsigned(value)), |n| {
            Self::Number(Number::Integer(n))
        })
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Number(Number::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Self::Number(Number::Unsigned(u))
                } else {
                    n.as_f64()
                        .map_or_else(|| Self::Other("number".to_string()), Self::from)
                }
            }
            serde_json::Value::Array(_) => Self::Other("sequence".to_string()),
            serde_json::Value::Object(_) => Self::Other("mapping".to_string()),
        }
    }
}

/// Variables available to a render, keyed by name.
pub type Environment = HashMap<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitive_substitution() {
        assert_eq!(Value::from("bar").to_substitution(), Some("bar".to_string()));
        assert_eq!(Value::from(true).to_substitution(), Some("true".to_string()));
        assert_eq!(Value::from(false).to_substitution(), Some("false".to_string()));
        assert_eq!(Value::from(-42_i64).to_substitution(), Some("-42".to_string()));
        assert_eq!(Value::from(1.5).to_substitution(), Some("1.5".to_string()));
    }

    #[test]
    fn test_float_uses_shortest_representation() {
        assert_eq!(Value::from(0.1).to_substitution(), Some("0.1".to_string()));
        assert_eq!(Value::from(3.0).to_substitution(), Some("3".to_string()));
    }

    #[test]
    fn test_large_unsigned() {
        assert_eq!(
            Value::from(u64::MAX),
            Value::Number(Number::Unsigned(u64::MAX))
        );
        assert_eq!(Value::from(7_u64), Value::Number(Number::Integer(7)));
    }

    #[test]
    fn test_non_primitives_have_no_substitution() {
        assert!(!Value::Null.is_primitive());
        assert!(Value::Null.is_null());
        assert_eq!(Value::Other("sequence".into()).to_substitution(), None);
        assert_eq!(Value::Other("sequence".into()).kind(), "sequence");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_from_json_value() {
        let json = serde_json::json!({
            "s": "text",
            "i": 8080,
            "f": 2.5,
            "b": true,
            "n": null,
            "a": [1, 2],
            "o": {"k": "v"}
        });
        let env: Environment = serde_json::from_value(json).unwrap();

        assert_eq!(env["s"], Value::from("text"));
        assert_eq!(env["i"], Value::Number(Number::Integer(8080)));
        assert_eq!(env["f"], Value::Number(Number::Float(2.5)));
        assert_eq!(env["b"], Value::Boolean(true));
        assert_eq!(env["n"], Value::Null);
        assert_eq!(env["a"], Value::Other("sequence".to_string()));
        assert_eq!(env["o"], Value::Other("mapping".to_string()));
    }
}
