//! Date/time renderings.
//!
//! SQL and ISO 8601 renderings are machine formats and render every value,
//! the sentinel included. The human-readable formatters return an empty
//! string for the sentinel date.

use chrono::{NaiveDateTime, Timelike};
use oh_common::{SENTINEL_DATE_TIME, is_sentinel};

use crate::parse::parse_lenient;
use crate::patterns::{
    ABBREVIATED_DAY_FORMAT, EASTERN_SUFFIX, FRIENDLY_DATE_TIME_FORMAT, FULL_NAMED_DATE_FORMAT,
    ISO8601_SORTABLE_FORMAT, NAMED_MONTH_DATE_FORMAT, NAMED_MONTH_DATE_TIME_SECONDS_FORMAT,
    SIMPLE_DATE_FORMAT, SIMPLE_DATE_TIME_FORMAT, SQL_DATE_TIME_FORMAT, TIME_OF_DAY_FORMAT,
};

/// Returned by [`full_month_name`] for numbers outside 1-12.
pub const INVALID_MONTH: &str = "Invalid Month";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats a display pattern, or `""` for the sentinel date.
fn display(value: NaiveDateTime, pattern: &str) -> String {
    if is_sentinel(&value) {
        String::new()
    } else {
        value.format(pattern).to_string()
    }
}

/// `MM/dd/yyyy HH:mm:ss:fff`, e.g. `01/02/2024 13:04:05:678`.
pub fn to_sql_string(value: NaiveDateTime) -> String {
    value.format(SQL_DATE_TIME_FORMAT).to_string()
}

/// Sortable ISO 8601 with a literal `Z`, e.g. `2024-01-01T00:00:00Z`.
///
/// The value is assumed to already be UTC; no conversion happens here.
pub fn to_utc_iso8601(value: NaiveDateTime) -> String {
    format!("{}Z", value.format(ISO8601_SORTABLE_FORMAT))
}

/// `M/d/yyyy`, e.g. `1/2/2024`.
pub fn simple_date(value: NaiveDateTime) -> String {
    display(value, SIMPLE_DATE_FORMAT)
}

/// `M/d/yyyy h:mm tt`, e.g. `1/2/2024 1:04 PM`.
pub fn simple_date_time(value: NaiveDateTime) -> String {
    display(value, SIMPLE_DATE_TIME_FORMAT)
}

/// Parses the string leniently, then renders it as [`simple_date_time`].
///
/// Unparseable input renders as `""`.
pub fn simple_date_time_from_str(value: &str) -> String {
    simple_date_time(parse_lenient(value).unwrap_or(SENTINEL_DATE_TIME))
}

/// Message timestamp, e.g. `Aug 14, 2013 5:41pm`.
pub fn friendly_date_time(value: NaiveDateTime) -> String {
    display(value, FRIENDLY_DATE_TIME_FORMAT)
}

/// Message timestamp with an Eastern suffix, e.g. `Aug 14, 2013 5:41pm ET`.
pub fn friendly_date_time_et(value: NaiveDateTime) -> String {
    with_eastern_suffix(friendly_date_time(value))
}

/// `dddd, MMMM dd, yyyy`, e.g. `Friday, June 04, 1999`.
pub fn full_named_date(value: NaiveDateTime) -> String {
    display(value, FULL_NAMED_DATE_FORMAT)
}

/// `MMM dd, yyyy`, e.g. `Jun 04, 1999`.
pub fn named_month_date(value: NaiveDateTime) -> String {
    display(value, NAMED_MONTH_DATE_FORMAT)
}

/// e.g. `Jun 4, 1999 4:13:45pm ET`.
pub fn named_month_date_time_seconds_et(value: NaiveDateTime) -> String {
    with_eastern_suffix(display(value, NAMED_MONTH_DATE_TIME_SECONDS_FORMAT))
}

/// 12-hour clock time without designator, e.g. `4:13`.
pub fn time_of_day(value: NaiveDateTime) -> String {
    display(value, TIME_OF_DAY_FORMAT)
}

/// `AM` or `PM`; `""` for the sentinel.
pub fn am_pm_designator(value: NaiveDateTime) -> &'static str {
    if is_sentinel(&value) {
        ""
    } else if value.hour() < 12 {
        "AM"
    } else {
        "PM"
    }
}

/// Abbreviated weekday name, e.g. `Tue`.
pub fn abbreviated_day(value: NaiveDateTime) -> String {
    display(value, ABBREVIATED_DAY_FORMAT)
}

/// Full English month name for 1-12, [`INVALID_MONTH`] otherwise.
pub fn full_month_name(month: i32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|idx| MONTH_NAMES.get(idx))
        .copied()
        .unwrap_or(INVALID_MONTH)
}

fn with_eastern_suffix(rendered: String) -> String {
    if rendered.is_empty() {
        rendered
    } else {
        rendered + EASTERN_SUFFIX
    }
}
