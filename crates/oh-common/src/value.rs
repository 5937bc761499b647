//! Untyped values handed to the coercion functions.
//!
//! A [`Value`] is whatever arrived from outside the type system: a form field,
//! a table cell, a loosely typed configuration entry. Coercions stringify it
//! and parse the text, so the [`Display`](fmt::Display) rendering below is part
//! of the conversion contract.

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;

use crate::numeric::format_numeric;

/// Rendering used when a date-time value is stringified (`M/d/yyyy h:mm:ss tt`).
pub const DATE_TIME_DISPLAY_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// A value of unknown origin type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent or null.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(BigDecimal),
    Text(String),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean payload, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the date-time payload, if this is a [`Value::DateTime`].
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => f.write_str(&format_numeric(*v)),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
            Value::DateTime(dt) => write!(f, "{}", dt.format(DATE_TIME_DISPLAY_FORMAT)),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    #[test]
    fn test_display_null_is_empty() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(None::<&str>).to_string(), "");
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(1.0).to_string(), "1");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(
            Value::from(BigDecimal::from_str("10.25").unwrap()).to_string(),
            "10.25"
        );
    }

    #[test]
    fn test_display_date_time() {
        let dt = NaiveDate::from_ymd_opt(2013, 8, 14)
            .unwrap()
            .and_hms_opt(17, 41, 5)
            .unwrap();
        assert_eq!(Value::from(dt).to_string(), "8/14/2013 5:41:05 PM");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
        assert!(Value::from(None::<i64>).is_null());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(1).as_bool(), None);
        assert!(Value::Text("x".into()).as_date_time().is_none());
    }
}
