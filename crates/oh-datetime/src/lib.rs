//! Date/time helpers with fixed, literal output patterns.
//!
//! This crate provides stateless date/time utilities:
//!
//! - **patterns**: the literal format strings downstream callers depend on
//! - **bounds**: start/end of day and month boundaries
//! - **format**: SQL-style, ISO 8601, and human-readable renderings
//! - **parse**: lenient and ISO 8601 round-trip parsing
//! - **eastern**: US Eastern Time <-> UTC conversion
//!
//! Every function tolerates the sentinel date ([`oh_common::SENTINEL_DATE_TIME`]):
//! conversions pass it through, the SQL and ISO 8601 renderings print it, and
//! the human-readable formatters (including time of day, AM/PM and weekday)
//! render it as `""`.

pub mod bounds;
pub mod eastern;
pub mod format;
pub mod parse;
pub mod patterns;

pub use bounds::{
    end_of_day, end_of_minute, first_day_of_month, last_day_of_month, start_of_day,
};
pub use eastern::{eastern_to_utc, utc_to_eastern};
pub use format::{
    INVALID_MONTH, abbreviated_day, am_pm_designator, friendly_date_time, friendly_date_time_et,
    full_month_name, full_named_date, named_month_date, named_month_date_time_seconds_et,
    simple_date, simple_date_time, simple_date_time_from_str, time_of_day, to_sql_string,
    to_utc_iso8601,
};
pub use parse::{
    is_valid_date, iso8601_to_end_of_day, iso8601_to_start_of_day, parse_lenient, parse_sql,
};
