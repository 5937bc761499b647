//! Lenient and ISO 8601 date/time parsing.
//!
//! Parsing never fails loudly: unparseable input yields `None` and callers pick
//! their own fallback (usually the sentinel date).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use oh_common::logging::redact_value;

use crate::bounds::{end_of_day, start_of_day};
use crate::patterns::{LENIENT_DATE_FORMATS, LENIENT_DATE_TIME_FORMATS, SQL_DATE_TIME_FORMAT};

/// Parses the exact SQL-style pattern `MM/dd/yyyy HH:mm:ss:fff`.
pub fn parse_sql(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), SQL_DATE_TIME_FORMAT).ok()
}

/// Parses a date/time in any of the accepted layouts.
///
/// Tried in order:
/// 1. The SQL-style pattern `MM/dd/yyyy HH:mm:ss:fff`
/// 2. RFC 3339 / ISO 8601 with a `Z` or numeric offset (converted to UTC)
/// 3. ISO 8601 and US month-first date-times without an offset
/// 4. Date-only layouts (midnight)
pub fn parse_lenient(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(parsed) = parse_sql(trimmed) {
        return Some(parsed);
    }

    if let Some(parsed) = parse_with_offset(trimmed) {
        return Some(parsed);
    }

    if let Some(parsed) = LENIENT_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Some(parsed);
    }

    LENIENT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Parses offset-bearing ISO 8601 input, normalized to UTC wall-clock time.
fn parse_with_offset(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
        .map(|parsed| parsed.naive_utc())
}

/// Returns true if the string parses as a date/time.
pub fn is_valid_date(value: &str) -> bool {
    parse_lenient(value).is_some()
}

/// Parses an ISO 8601 string (e.g. `2016-04-08T07:00:00.000Z`) and sets the
/// time to the end of the day (23:59:59.998).
pub fn iso8601_to_end_of_day(value: &str) -> Option<NaiveDateTime> {
    parse_iso8601(value).map(end_of_day)
}

/// Parses an ISO 8601 string (e.g. `2016-04-08T07:00:00.000Z`) and sets the
/// time to the start of the day (00:00:00).
pub fn iso8601_to_start_of_day(value: &str) -> Option<NaiveDateTime> {
    parse_iso8601(value).map(start_of_day)
}

fn parse_iso8601(value: &str) -> Option<NaiveDateTime> {
    let parsed = parse_lenient(value);
    if parsed.is_none() {
        tracing::trace!(value = redact_value(value), "unparseable ISO 8601 date");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parses_sql_pattern_with_milliseconds() {
        let parsed = parse_sql("01/02/2024 13:04:05:678").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_milli_opt(13, 4, 5, 678)
                .unwrap()
        );
    }

    #[test]
    fn sql_pattern_rejects_other_layouts() {
        assert!(parse_sql("2024-01-02T13:04:05").is_none());
        assert!(parse_sql("01/02/2024 13:04:05").is_none());
    }

    #[test]
    fn parses_iso_with_zulu_and_offset() {
        assert_eq!(
            parse_lenient("2016-04-08T07:00:00.000Z"),
            Some(dt(2016, 4, 8, 7, 0, 0))
        );
        assert_eq!(
            parse_lenient("2016-04-08T07:00:00-04:00"),
            Some(dt(2016, 4, 8, 11, 0, 0))
        );
    }

    #[test]
    fn parses_month_first_layouts() {
        assert_eq!(parse_lenient("1/2/2024"), Some(dt(2024, 1, 2, 0, 0, 0)));
        assert_eq!(
            parse_lenient("8/14/2013 5:41:05 PM"),
            Some(dt(2013, 8, 14, 17, 41, 5))
        );
        assert_eq!(
            parse_lenient("8/14/2013 5:41 PM"),
            Some(dt(2013, 8, 14, 17, 41, 0))
        );
    }

    #[test]
    fn parses_named_month_layouts() {
        assert_eq!(parse_lenient("June 4, 1999"), Some(dt(1999, 6, 4, 0, 0, 0)));
        assert_eq!(parse_lenient("Jun 04, 1999"), Some(dt(1999, 6, 4, 0, 0, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_lenient("").is_none());
        assert!(parse_lenient("   ").is_none());
        assert!(parse_lenient("not a date").is_none());
        assert!(parse_lenient("13/45/2024").is_none());
        assert!(!is_valid_date("2024-02-30"));
        assert!(is_valid_date("2024-02-29"));
    }

    #[test]
    fn iso_start_and_end_of_day() {
        assert_eq!(
            iso8601_to_start_of_day("2016-04-08T07:00:00.000Z"),
            Some(dt(2016, 4, 8, 0, 0, 0))
        );
        assert_eq!(
            iso8601_to_end_of_day("2016-04-08T07:00:00.000Z"),
            NaiveDate::from_ymd_opt(2016, 4, 8)
                .unwrap()
                .and_hms_milli_opt(23, 59, 59, 998)
        );
        assert!(iso8601_to_end_of_day("garbage").is_none());
    }
}
