//! Whole-file loading into in-memory streams.
//!
//! The whole file is read in one pass; there is no chunking, so callers
//! that may see very large files should set [`LoadOptions::max_size`].

mod error;
mod loader;

pub use error::{LoadError, Result};
pub use loader::{LoadOptions, memory_stream_from_file, memory_stream_from_file_with_options};
