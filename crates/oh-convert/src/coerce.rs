//! Best-effort coercion of untyped values.
//!
//! Every function here returns the caller's default instead of failing.
//! A failed conversion emits a `trace` event; the offending text is redacted
//! unless value logging was enabled with `set_log_values`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use oh_common::logging::redact_value;
use oh_common::{SENTINEL_DATE_TIME, Value};
use oh_datetime::parse_lenient;

/// Words read as `true`, compared after trimming and lowercasing.
const TRUE_WORDS: &[&str] = &["1", "yes", "on", "true"];
/// Words read as `false`, compared after trimming and lowercasing.
const FALSE_WORDS: &[&str] = &["0", "no", "false"];

fn fallback<T>(target: &'static str, text: &str, default: T) -> T {
    tracing::trace!(
        target_type = target,
        value = redact_value(text),
        "coercion fell back to default"
    );
    default
}

/// Reads a flag from common textual spellings.
///
/// `1`, `yes`, `on`, `true` are true and `0`, `no`, `false` are false in any
/// case and with surrounding whitespace. Anything else yields `default`.
pub fn to_bool(value: impl Into<Value>, default: bool) -> bool {
    let value = value.into();
    if let Value::Bool(flag) = value {
        return flag;
    }
    let text = value.to_string().trim().to_lowercase();
    if TRUE_WORDS.contains(&text.as_str()) {
        true
    } else if FALSE_WORDS.contains(&text.as_str()) {
        false
    } else {
        fallback("bool", &text, default)
    }
}

/// Booleans become one or zero; everything else is parsed from its
/// string form after trimming.
fn to_number<T: FromStr>(value: Value, target: &'static str, one: T, zero: T, default: T) -> T {
    match value {
        Value::Bool(true) => one,
        Value::Bool(false) => zero,
        Value::Null => default,
        other => {
            let text = other.to_string();
            match text.trim().parse::<T>() {
                Ok(number) => number,
                Err(_) => fallback(target, &text, default),
            }
        }
    }
}

/// 32-bit integer, or `default` when the value is not an integer literal.
pub fn to_int(value: impl Into<Value>, default: i32) -> i32 {
    to_number(value.into(), "i32", 1, 0, default)
}

/// 64-bit integer, or `default` when the value is not an integer literal.
pub fn to_long(value: impl Into<Value>, default: i64) -> i64 {
    to_number(value.into(), "i64", 1, 0, default)
}

/// Exact decimal, or `default` when the value is not numeric.
pub fn to_decimal(value: impl Into<Value>, default: BigDecimal) -> BigDecimal {
    match value.into() {
        Value::Decimal(decimal) => decimal,
        other => to_number(other, "decimal", BigDecimal::from(1), BigDecimal::from(0), default),
    }
}

/// Double-precision float, or `default` when the value is not numeric.
pub fn to_double(value: impl Into<Value>, default: f64) -> f64 {
    match value.into() {
        Value::Float(number) => number,
        other => to_number(other, "f64", 1.0, 0.0, default),
    }
}

/// Date/time values pass through; text is tried as the SQL pattern first
/// and then the lenient formats. Failures yield `default`.
pub fn to_date_time(value: impl Into<Value>, default: NaiveDateTime) -> NaiveDateTime {
    match value.into() {
        Value::DateTime(date_time) => date_time,
        Value::Null => default,
        other => {
            let text = other.to_string();
            parse_lenient(&text).unwrap_or_else(|| fallback("date-time", &text, default))
        }
    }
}

/// [`to_date_time`] defaulting to the sentinel date.
pub fn to_date_time_or_sentinel(value: impl Into<Value>) -> NaiveDateTime {
    to_date_time(value, SENTINEL_DATE_TIME)
}

/// String form of the value; null becomes `""`.
pub fn to_null_safe_string(value: impl Into<Value>) -> String {
    value.into().to_string()
}

/// String form of the value; null becomes `default`.
///
/// A present but empty value stays empty.
pub fn to_null_safe_string_or(value: impl Into<Value>, default: &str) -> String {
    match value.into() {
        Value::Null => default.to_string(),
        other => other.to_string(),
    }
}

/// Maps an absent value to the database null marker.
pub fn to_db_safe_value(value: Option<Value>) -> Value {
    value.unwrap_or_default()
}
