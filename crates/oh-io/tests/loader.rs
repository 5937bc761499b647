use std::io::{Read, Write};

use oh_io::{LoadError, LoadOptions, memory_stream_from_file, memory_stream_from_file_with_options};
use tempfile::{NamedTempFile, TempDir};

fn file_with(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_loads_full_contents_at_start() {
    let file = file_with(b"hello\x00world\n");
    let mut stream = memory_stream_from_file(file.path()).unwrap();
    assert_eq!(stream.position(), 0);

    let mut read_back = Vec::new();
    stream.read_to_end(&mut read_back).unwrap();
    assert_eq!(read_back, b"hello\x00world\n");
}

#[test]
fn test_empty_file_gives_empty_stream() {
    let file = file_with(b"");
    let stream = memory_stream_from_file(file.path()).unwrap();
    assert!(stream.get_ref().is_empty());
}

#[test]
fn test_missing_file_is_access_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.bin");
    let err = memory_stream_from_file(&path).unwrap_err();
    match &err {
        LoadError::FileAccess { path: reported, source } => {
            assert_eq!(reported, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("absent.bin"));
}

#[test]
fn test_size_limit() {
    let file = file_with(&[7u8; 64]);

    let stream =
        memory_stream_from_file_with_options(file.path(), &LoadOptions::new().with_max_size(64))
            .unwrap();
    assert_eq!(stream.get_ref().len(), 64);

    let err =
        memory_stream_from_file_with_options(file.path(), &LoadOptions::new().with_max_size(63))
            .unwrap_err();
    assert!(matches!(
        err,
        LoadError::FileTooLarge {
            size: 64,
            max_size: 63,
            ..
        }
    ));
}
