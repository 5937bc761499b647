//! Conversion helpers for untyped values and strings.
//!
//! Two failure policies:
//!
//! - **Best-effort**: [`coerce`] functions, the [`tokenize`] splitter, the
//!   numeric list parsers, and the [`strings`]/[`encode`] helpers never fail.
//!   They return the caller's default, an empty value, or `None`.
//! - **Fail-loud**: [`from_csv_to_list_of`], the numeric path of
//!   [`from_csv_to_enum_list`], [`parse_enum`], and [`to_json`] return
//!   [`ConvertError`].

pub mod coerce;
pub mod encode;
mod error;
pub mod lists;
pub mod strings;
pub mod tokenize;

// === Error Types ===
pub use error::{ConvertError, Result};

// === Coercion ===
pub use coerce::{
    to_bool, to_date_time, to_date_time_or_sentinel, to_db_safe_value, to_decimal, to_double,
    to_int, to_long, to_null_safe_string, to_null_safe_string_or,
};

// === Tokenizing and lists ===
pub use lists::{
    CsvEnum, from_csv_to_enum_list, from_csv_to_list_of, parse_enum, to_csv_from_list,
    to_list_of_int, to_list_of_long,
};
pub use tokenize::{split_delimited, to_list_of_string};

// === String helpers ===
pub use encode::{
    to_html_decode, to_html_encode, to_json, to_url_decode, to_url_encode, to_url_path_encode,
    xml_decode, xml_encode,
};
pub use strings::{
    Comparison, bool_to_lower_case, contains_with, is_date_time, is_numeric, left, right,
    to_ascii_bytes, to_camel_case, to_null_from_empty, trim_end_chars, trim_start_chars, truncate,
};
