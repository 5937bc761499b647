//! Error types for file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a file into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened, sized, or read.
    #[error("failed to access file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is larger than the configured limit.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;
