//! US Eastern Time <-> UTC conversion.
//!
//! Eastern Standard Time is UTC-5 and Eastern Daylight Time is UTC-4.
//! Daylight time runs from 02:00 local on its start Sunday to 02:00 local on
//! its end Sunday:
//!
//! - 2007 onward: second Sunday in March to first Sunday in November
//! - before 2007: first Sunday in April to last Sunday in October
//!
//! Local times that fall in the spring-forward gap or the repeated fall-back
//! hour are read as standard time.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use oh_common::is_sentinel;

const STANDARD_OFFSET_HOURS: i64 = -5;
const DAYLIGHT_OFFSET_HOURS: i64 = -4;
const TRANSITION_HOUR: u32 = 2;
const CURRENT_RULES_YEAR: i32 = 2007;

/// Converts an Eastern wall-clock time to UTC.
///
/// The sentinel date is returned unchanged.
pub fn eastern_to_utc(eastern: NaiveDateTime) -> NaiveDateTime {
    if is_sentinel(&eastern) {
        return eastern;
    }
    let offset = if is_daylight_local(eastern) {
        DAYLIGHT_OFFSET_HOURS
    } else {
        STANDARD_OFFSET_HOURS
    };
    eastern
        .checked_sub_signed(Duration::hours(offset))
        .unwrap_or(eastern)
}

/// Converts a UTC time to Eastern wall-clock time.
///
/// The sentinel date is returned unchanged.
pub fn utc_to_eastern(utc: NaiveDateTime) -> NaiveDateTime {
    if is_sentinel(&utc) {
        return utc;
    }
    let offset = if is_daylight_utc(utc) {
        DAYLIGHT_OFFSET_HOURS
    } else {
        STANDARD_OFFSET_HOURS
    };
    utc.checked_add_signed(Duration::hours(offset))
        .unwrap_or(utc)
}

/// Local start and end (exclusive) of daylight time for a year.
fn daylight_bounds(year: i32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let (start, end) = if year >= CURRENT_RULES_YEAR {
        (
            NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2)?,
            NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1)?,
        )
    } else {
        (
            NaiveDate::from_weekday_of_month_opt(year, 4, Weekday::Sun, 1)?,
            last_sunday(year, 10)?,
        )
    };
    Some((
        start.and_hms_opt(TRANSITION_HOUR, 0, 0)?,
        end.and_hms_opt(TRANSITION_HOUR, 0, 0)?,
    ))
}

fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next_month.pred_opt()?;
    let back = i64::from(last.weekday().num_days_from_sunday());
    last.checked_sub_signed(Duration::days(back))
}

/// Daylight time for a local wall-clock reading.
///
/// The gap hour after the spring transition and the repeated hour before the
/// fall transition both count as standard time.
fn is_daylight_local(local: NaiveDateTime) -> bool {
    let Some((start, end)) = daylight_bounds(local.year()) else {
        return false;
    };
    let first_daylight = start + Duration::hours(1);
    let last_daylight = end - Duration::hours(1);
    local >= first_daylight && local < last_daylight
}

/// Daylight time for a UTC instant.
fn is_daylight_utc(utc: NaiveDateTime) -> bool {
    let Some(standard_local) = utc.checked_add_signed(Duration::hours(STANDARD_OFFSET_HOURS))
    else {
        return false;
    };
    let Some((start, end)) = daylight_bounds(standard_local.year()) else {
        return false;
    };
    // Start is read on standard time, end on daylight time
    let start_utc = start - Duration::hours(STANDARD_OFFSET_HOURS);
    let end_utc = end - Duration::hours(DAYLIGHT_OFFSET_HOURS);
    utc >= start_utc && utc < end_utc
}
