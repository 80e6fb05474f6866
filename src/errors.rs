//! Errors raised by file records
//!
//! Higher layers (catalog, commands) wrap these in `anyhow` with context,
//! but the record API keeps them typed so callers can tell a vanished file
//! apart from other read failures.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The file is gone from its recorded path
    #[error("could not open file '{}'", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read '{}': {kind}", path.display())]
    Unreadable { path: PathBuf, kind: io::ErrorKind },

    /// The path could not be resolved to an absolute path
    #[error("invalid path '{}': {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// A persisted record that cannot be turned back into a file record
    #[error("malformed save data: {0}")]
    MalformedSaveData(String),
}

impl RecordError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => RecordError::NotFound(path.to_path_buf()),
            kind => RecordError::Unreadable {
                path: path.to_path_buf(),
                kind,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RecordError::NotFound(_))
    }
}

pub type RecordResult<T> = Result<T, RecordError>;
