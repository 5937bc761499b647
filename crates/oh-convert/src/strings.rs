//! Small string utilities.

use oh_common::parse_f64;
use oh_datetime::is_valid_date;

/// How [`contains_with`] compares text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Exact code-point comparison.
    #[default]
    Ordinal,
    /// Code-point comparison after lowercasing both sides.
    OrdinalIgnoreCase,
}

/// Substring test with a choice of comparison.
pub fn contains_with(value: &str, needle: &str, comparison: Comparison) -> bool {
    match comparison {
        Comparison::Ordinal => value.contains(needle),
        Comparison::OrdinalIgnoreCase => value.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// True when the trimmed text parses as a finite number.
pub fn is_numeric(value: &str) -> bool {
    parse_f64(value).is_some_and(f64::is_finite)
}

/// True when the text parses as a date with any accepted pattern.
pub fn is_date_time(value: &str) -> bool {
    is_valid_date(value)
}

/// First `length` characters.
pub fn left(value: &str, length: usize) -> String {
    value.chars().take(length).collect()
}

/// Last `length` characters.
pub fn right(value: &str, length: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(length)).collect()
}

/// Cuts to `length` characters and appends `...` when anything was cut.
pub fn truncate(value: &str, length: usize) -> String {
    if value.chars().count() > length {
        format!("{}...", left(value, length))
    } else {
        value.to_string()
    }
}

/// ASCII bytes; every non-ASCII character becomes `?`.
pub fn to_ascii_bytes(value: &str) -> Vec<u8> {
    value
        .chars()
        .map(|c| u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(b'?'))
        .collect()
}

/// Lowercases the first character only.
pub fn to_camel_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `None` for empty text.
pub fn to_null_from_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Removes any of `chars` from the end.
pub fn trim_end_chars(value: &str, chars: &str) -> String {
    value.trim_end_matches(|c| chars.contains(c)).to_string()
}

/// Removes any of `chars` from the start.
pub fn trim_start_chars(value: &str, chars: &str) -> String {
    value.trim_start_matches(|c| chars.contains(c)).to_string()
}

/// `"true"` or `"false"`.
pub fn bool_to_lower_case(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
