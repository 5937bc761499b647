//! Error types for the fail-loud conversions.

use thiserror::Error;

/// Errors raised by conversions that do not swallow bad input.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A list token could not be converted to the target type.
    #[error("cannot convert '{token}' to {target}: {reason}")]
    InvalidToken {
        token: String,
        target: &'static str,
        reason: String,
    },

    /// An integer does not correspond to any member of the enum.
    #[error("{value} is not a defined value of {target}")]
    UndefinedEnumValue { value: i64, target: &'static str },

    /// A name does not correspond to any member of the enum.
    #[error("'{name}' is not a member of {target}")]
    UnknownEnumName { name: String, target: &'static str },

    /// Serialization to JSON failed.
    #[error("failed to serialize value to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for fail-loud conversions.
pub type Result<T> = std::result::Result<T, ConvertError>;
