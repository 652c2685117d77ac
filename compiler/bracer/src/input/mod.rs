//! Reading source files from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a source file could not be read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("'{}' is too large to scan ({len} bytes)", .path.display())]
    TooLarge { path: PathBuf, len: u64 },

    #[error("error reading '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl InputError {
    fn from_io(path: &Path, e: io::Error) -> Self {
        let path = path.to_path_buf();
        match e.kind() {
            io::ErrorKind::NotFound => InputError::NotFound { path },
            io::ErrorKind::PermissionDenied => InputError::PermissionDenied { path },
            io::ErrorKind::InvalidData => InputError::InvalidUtf8 { path },
            _ => InputError::Io { path, source: e },
        }
    }

    /// The path that failed.
    pub fn path(&self) -> &Path {
        match self {
            InputError::NotFound { path }
            | InputError::PermissionDenied { path }
            | InputError::InvalidUtf8 { path }
            | InputError::TooLarge { path, .. }
            | InputError::Io { path, .. } => path,
        }
    }
}

/// A source file loaded into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    /// Display form of the path, as used in reports.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read `path` as UTF-8 text.
///
/// Offsets in the scanner are `u32`, so files past 4 GiB are refused up
/// front instead of being scanned partially.
pub fn read_source(path: &Path) -> Result<SourceFile, InputError> {
    let len = fs::metadata(path)
        .map_err(|e| InputError::from_io(path, e))?
        .len();
    if len > u64::from(u32::MAX) {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
            len,
        });
    }
    let text = fs::read_to_string(path).map_err(|e| InputError::from_io(path, e))?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        text,
    })
}
