//! Bridge from Polars cells to [`Value`].

use oh_common::Value;
use polars::prelude::AnyValue;

/// Converts a Polars cell to a [`Value`].
///
/// Integers widen to `i64`; `u64` values beyond `i64::MAX` and any other
/// dtype fall back to their text rendering.
///
/// # Examples
///
/// ```
/// use oh_common::Value;
/// use oh_table::value_from_any;
/// use polars::prelude::AnyValue;
///
/// assert_eq!(value_from_any(AnyValue::Null), Value::Null);
/// assert_eq!(value_from_any(AnyValue::Int32(42)), Value::Int(42));
/// assert_eq!(value_from_any(AnyValue::String("hello")), Value::from("hello"));
/// ```
pub fn value_from_any(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::Int8(v) => Value::Int(i64::from(v)),
        AnyValue::Int16(v) => Value::Int(i64::from(v)),
        AnyValue::Int32(v) => Value::Int(i64::from(v)),
        AnyValue::Int64(v) => Value::Int(v),
        AnyValue::UInt8(v) => Value::Int(i64::from(v)),
        AnyValue::UInt16(v) => Value::Int(i64::from(v)),
        AnyValue::UInt32(v) => Value::Int(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => Value::Int(v),
            Err(_) => Value::Text(v.to_string()),
        },
        AnyValue::Float32(v) => Value::Float(f64::from(v)),
        AnyValue::Float64(v) => Value::Float(v),
        AnyValue::String(s) => Value::Text(s.to_string()),
        AnyValue::StringOwned(s) => Value::Text(s.to_string()),
        other => Value::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_widen() {
        assert_eq!(value_from_any(AnyValue::Int8(-3)), Value::Int(-3));
        assert_eq!(value_from_any(AnyValue::UInt32(7)), Value::Int(7));
        assert_eq!(value_from_any(AnyValue::Int64(-100)), Value::Int(-100));
    }

    #[test]
    fn test_large_unsigned_falls_back_to_text() {
        assert_eq!(
            value_from_any(AnyValue::UInt64(u64::MAX)),
            Value::Text(u64::MAX.to_string())
        );
    }

    #[test]
    fn test_floats_and_flags() {
        assert_eq!(value_from_any(AnyValue::Float64(1.5)), Value::Float(1.5));
        assert_eq!(value_from_any(AnyValue::Float32(0.5)), Value::Float(0.5));
        assert_eq!(value_from_any(AnyValue::Boolean(true)), Value::Bool(true));
    }
}
