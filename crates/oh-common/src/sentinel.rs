//! The sentinel date used as a "no value" marker.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const SENTINEL_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => panic!("0001-01-01 is a valid calendar date"),
};

/// Minimum date-time (`0001-01-01T00:00:00`), used throughout as "no value".
///
/// Display formatters render it as an empty string and timezone conversions
/// return it unchanged.
pub const SENTINEL_DATE_TIME: NaiveDateTime = NaiveDateTime::new(SENTINEL_DATE, NaiveTime::MIN);

/// Returns true if the value is the sentinel date-time.
pub fn is_sentinel(value: &NaiveDateTime) -> bool {
    *value == SENTINEL_DATE_TIME
}
