//! Typed lists from comma-separated text, and back.

use std::fmt::Display;
use std::str::FromStr;

use oh_common::parse_i64;

use crate::error::{ConvertError, Result};
use crate::strings::is_numeric;
use crate::tokenize::to_list_of_string;

/// An enum that can be read from list tokens.
///
/// Implementors list every member once; lookups are derived from that table.
///
/// ```
/// use oh_convert::CsvEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Status {
///     Open = 1,
///     Closed = 2,
/// }
///
/// impl CsvEnum for Status {
///     const MEMBERS: &'static [(&'static str, i64, Self)] =
///         &[("Open", 1, Status::Open), ("Closed", 2, Status::Closed)];
/// }
///
/// assert_eq!(Status::from_name("Closed"), Some(Status::Closed));
/// assert_eq!(Status::from_repr(1), Some(Status::Open));
/// ```
pub trait CsvEnum: Copy + 'static {
    /// Every member as `(name, underlying value, member)`.
    const MEMBERS: &'static [(&'static str, i64, Self)];

    /// Member whose name matches exactly.
    fn from_name(name: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .find(|(member, _, _)| *member == name)
            .map(|&(_, _, value)| value)
    }

    /// Member whose name matches ignoring case.
    fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .find(|(member, _, _)| member.eq_ignore_ascii_case(name))
            .map(|&(_, _, value)| value)
    }

    /// Member with the given underlying value.
    fn from_repr(repr: i64) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .find(|(_, value, _)| *value == repr)
            .map(|&(_, _, value)| value)
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Comma-separated 32-bit integers; `None` if any token is not one.
pub fn to_list_of_int(value: &str) -> Option<Vec<i32>> {
    parse_every_token(value)
}

/// Comma-separated 64-bit integers; `None` if any token is not one.
pub fn to_list_of_long(value: &str) -> Option<Vec<i64>> {
    parse_every_token(value)
}

fn parse_every_token<T: FromStr>(value: &str) -> Option<Vec<T>> {
    to_list_of_string(value, ",")
        .iter()
        .map(|token| token.parse().ok())
        .collect()
}

/// Converts every comma-separated token to `T`.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidToken`] for the first token that does not
/// parse.
pub fn from_csv_to_list_of<T>(csv: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    to_list_of_string(csv, ",")
        .into_iter()
        .map(|token| {
            token.parse::<T>().map_err(|err| ConvertError::InvalidToken {
                reason: err.to_string(),
                token,
                target: short_type_name::<T>(),
            })
        })
        .collect()
}

/// Converts comma-separated tokens to enum members.
///
/// When the first token is numeric, every token is read as an underlying
/// integer value. Otherwise tokens are read as member names (or integer
/// values) and tokens that match nothing are skipped.
///
/// # Errors
///
/// In the numeric mode, returns [`ConvertError::InvalidToken`] for a token
/// that is not an integer and [`ConvertError::UndefinedEnumValue`] for an
/// integer that no member carries.
pub fn from_csv_to_enum_list<E: CsvEnum>(csv: &str) -> Result<Vec<E>> {
    let tokens = to_list_of_string(csv, ",");
    let numeric = tokens.first().is_some_and(|first| is_numeric(first));

    if numeric {
        tokens
            .into_iter()
            .map(enum_from_integer_token::<E>)
            .collect()
    } else {
        Ok(tokens
            .iter()
            .filter_map(|token| {
                let member = lookup_name_or_repr::<E>(token);
                if member.is_none() {
                    tracing::debug!(
                        token = %token,
                        target_type = short_type_name::<E>(),
                        "skipping unknown enum token"
                    );
                }
                member
            })
            .collect())
    }
}

fn enum_from_integer_token<E: CsvEnum>(token: String) -> Result<E> {
    let target = short_type_name::<E>();
    let repr = token
        .parse::<i64>()
        .map_err(|err| ConvertError::InvalidToken {
            reason: err.to_string(),
            token,
            target,
        })?;
    E::from_repr(repr).ok_or(ConvertError::UndefinedEnumValue {
        value: repr,
        target,
    })
}

fn lookup_name_or_repr<E: CsvEnum>(token: &str) -> Option<E> {
    E::from_name(token).or_else(|| parse_i64(token).and_then(E::from_repr))
}

/// Parses one enum member by name ignoring case, or by underlying value.
///
/// # Errors
///
/// Returns [`ConvertError::UnknownEnumName`] when nothing matches.
pub fn parse_enum<E: CsvEnum>(value: &str) -> Result<E> {
    let trimmed = value.trim();
    E::from_name_ignore_case(trimmed)
        .or_else(|| parse_i64(trimmed).and_then(E::from_repr))
        .ok_or_else(|| ConvertError::UnknownEnumName {
            name: value.to_string(),
            target: short_type_name::<E>(),
        })
}

/// Joins items with `,`.
///
/// The separator is written only once the output is non-empty, so items
/// that render as `""` before the first non-empty item leave no trace.
pub fn to_csv_from_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut csv = String::new();
    for item in items {
        if !csv.is_empty() {
            csv.push(',');
        }
        csv.push_str(&item.to_string());
    }
    csv
}
