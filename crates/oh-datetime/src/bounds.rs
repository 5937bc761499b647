//! Day and month boundaries.

use chrono::{Datelike, Months, NaiveDateTime, NaiveTime, Timelike};
use oh_common::is_sentinel;

/// Milliseconds used for end-of-day and end-of-minute times.
///
/// 998 rather than 999: the storage engine rounds `.999` up to the next second.
pub const END_MILLISECOND: u32 = 998;

/// Sets the time of day to 00:00:00.000.
pub fn start_of_day(value: NaiveDateTime) -> NaiveDateTime {
    value.date().and_time(NaiveTime::MIN)
}

/// Sets the time of day to 23:59:59.998.
///
/// The sentinel date is returned unchanged.
pub fn end_of_day(value: NaiveDateTime) -> NaiveDateTime {
    if is_sentinel(&value) {
        return value;
    }
    value
        .date()
        .and_hms_milli_opt(23, 59, 59, END_MILLISECOND)
        .unwrap_or(value)
}

/// Keeps the hour and minute but sets seconds to 59.998.
///
/// Used for end dates entered with minute precision. The sentinel date is
/// returned unchanged.
pub fn end_of_minute(value: NaiveDateTime) -> NaiveDateTime {
    if is_sentinel(&value) {
        return value;
    }
    value
        .date()
        .and_hms_milli_opt(value.hour(), value.minute(), 59, END_MILLISECOND)
        .unwrap_or(value)
}

/// Midnight on the first day of the value's month.
pub fn first_day_of_month(value: NaiveDateTime) -> NaiveDateTime {
    let date = value.date();
    date.with_day(1).unwrap_or(date).and_time(NaiveTime::MIN)
}

/// Midnight on the last day of the value's month (first day + 1 month - 1 day).
pub fn last_day_of_month(value: NaiveDateTime) -> NaiveDateTime {
    let first = first_day_of_month(value);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.date().pred_opt())
        .map_or(first, |last| last.and_time(NaiveTime::MIN))
}
