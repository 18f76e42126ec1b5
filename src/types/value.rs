//! # Scalar values for trait and argument fields.
//!
//! [`Value`] is the closed set of scalars an [`Identity`](crate::Identity)
//! trait, [`Organization`](crate::Organization) trait, or event argument may
//! carry. Keeping the set finite and serde-serializable lets adapters map
//! fields onto their wire formats without inspecting arbitrary types.
//!
//! # Example
//! ```
//! use crosslytics::Value;
//!
//! let v = Value::from("Green");
//! assert_eq!(v, Value::Text("Green".to_string()));
//!
//! let n = Value::from(5);
//! assert!(n.is_numeric());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single trait or event-argument value.
///
/// The set is closed: adapters may exhaustively match on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicitly absent value.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Wall-clock timestamp (RFC 3339 on the wire).
    Date(DateTime<Utc>),
    /// UTF-8 text.
    Text(String),
}

impl Value {
    /// Returns true for [`Value::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns true for [`Value::Int`] and [`Value::Float`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns true for [`Value::Bool`].
    pub fn is_flag(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true for [`Value::Date`].
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Date(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from("x"), Value::Text("x".into()));
        assert_eq!(Value::from(5), Value::Int(5));
        assert_eq!(Value::from(5i64), Value::Int(5));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7)), Value::Int(7));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Value::Text("a".into()).is_text());
        assert!(Value::Int(1).is_numeric());
        assert!(Value::Float(1.0).is_numeric());
        assert!(Value::Bool(false).is_flag());
        assert!(Value::Null.is_null());
        assert!(!Value::Null.is_text());
    }

    #[test]
    fn test_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::Int(5)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&Value::Text("x".into())).unwrap(),
            "\"x\""
        );
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
    }
}
