use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use crate::error::{LoadError, Result};

/// Options for [`memory_stream_from_file_with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Largest file size accepted, in bytes. `None` accepts any size.
    pub max_size: Option<u64>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects files larger than `max_size` bytes.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = Some(max_size);
        self
    }
}

/// Reads the whole file into a cursor positioned at its start.
///
/// # Errors
///
/// Returns [`LoadError::FileAccess`] when the file cannot be opened or read.
pub fn memory_stream_from_file(path: impl AsRef<Path>) -> Result<Cursor<Vec<u8>>> {
    memory_stream_from_file_with_options(path, &LoadOptions::default())
}

/// Reads the whole file into a cursor, honoring `options`.
///
/// # Errors
///
/// Returns [`LoadError::FileAccess`] when the file cannot be opened, sized,
/// or read, and [`LoadError::FileTooLarge`] when it exceeds the size limit.
pub fn memory_stream_from_file_with_options(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Cursor<Vec<u8>>> {
    let path = path.as_ref();
    let access = |source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(access)?;
    let size = file.metadata().map_err(access)?.len();

    if let Some(max_size) = options.max_size
        && size > max_size
    {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }

    let mut buffer = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    file.read_to_end(&mut buffer).map_err(access)?;

    tracing::debug!(path = %path.display(), bytes = buffer.len(), "loaded file into memory");
    Ok(Cursor::new(buffer))
}
