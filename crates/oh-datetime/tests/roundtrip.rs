//! Property tests for ISO 8601 output/parse and Eastern/UTC conversion.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use oh_datetime::{
    end_of_day, eastern_to_utc, iso8601_to_end_of_day, iso8601_to_start_of_day, parse_lenient,
    start_of_day, to_sql_string, to_utc_iso8601, utc_to_eastern,
};
use proptest::prelude::*;

fn date_time() -> impl Strategy<Value = NaiveDateTime> {
    (2i32..=9999, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60, 0u32..1000).prop_map(
        |(y, mo, d, h, mi, s, ms)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_milli_opt(h, mi, s, ms)
                .unwrap()
        },
    )
}

proptest! {
    #[test]
    fn iso8601_start_round_trip_keeps_date(value in date_time()) {
        let parsed = iso8601_to_start_of_day(&to_utc_iso8601(value)).unwrap();
        prop_assert_eq!(parsed.date(), value.date());
        prop_assert_eq!(parsed, start_of_day(value));
    }

    #[test]
    fn iso8601_end_round_trip_keeps_date(value in date_time()) {
        let parsed = iso8601_to_end_of_day(&to_utc_iso8601(value)).unwrap();
        prop_assert_eq!(parsed.date(), value.date());
        prop_assert_eq!(parsed.nanosecond(), 998_000_000);
    }

    #[test]
    fn sql_string_round_trips_through_lenient_parser(value in date_time()) {
        prop_assert_eq!(parse_lenient(&to_sql_string(value)), Some(value));
    }

    #[test]
    fn end_of_day_stays_on_same_date(value in date_time()) {
        let end = end_of_day(value);
        prop_assert_eq!(end.date(), value.date());
        prop_assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
    }

    #[test]
    fn eastern_round_trip_away_from_transitions(
        year in 1990i32..2040,
        month in prop_oneof![Just(1u32), Just(2), Just(6), Just(7), Just(8), Just(12)],
        day in 1u32..=28,
        hour in 0u32..24,
    ) {
        let utc = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        let eastern = utc_to_eastern(utc);
        prop_assert_eq!(eastern_to_utc(eastern), utc);
        let hours_behind = (utc - eastern).num_hours();
        prop_assert!(hours_behind == 4 || hours_behind == 5);
        prop_assert!(eastern.year() >= year - 1);
    }
}
