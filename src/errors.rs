//! Error types for filekit
//!
//! Every failure carries a kind and a human-readable message that names the
//! offending path where there is one.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Result type alias for filekit operations
pub type Result<T> = std::result::Result<T, FileKitError>;

/// Coarse classification of a [`FileKitError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ParseError,
    IoFailure,
    InvalidArgument,
}

/// Main error type for all filekit operations
#[derive(Debug, Error)]
pub enum FileKitError {
    /// Missing file or directory
    #[error("Not found: {0}")]
    NotFound(String),

    /// Content is malformed for the target format or encoding
    #[error("Parse error: {0}")]
    Parse(String),

    /// Permission, disk or other OS-level I/O error
    #[error("I/O failure: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Caller supplied structurally invalid input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FileKitError {
    /// Classify an io::Error raised while touching `path`.
    ///
    /// `action` describes what was being attempted, e.g. "read file".
    pub fn from_io(error: io::Error, action: &str, path: &Path) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            FileKitError::NotFound(format!("{}: {}", action, path.display()))
        } else {
            FileKitError::io(error, action, path)
        }
    }

    /// Wrap an io::Error as an I/O failure, whatever its kind.
    ///
    /// Writers use this: a missing parent directory is an invalid target
    /// path, not a missing input.
    pub fn io(error: io::Error, action: &str, path: &Path) -> Self {
        FileKitError::Io {
            context: format!("{} {}", action, path.display()),
            source: error,
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FileKitError::NotFound(_) => ErrorKind::NotFound,
            FileKitError::Parse(_) => ErrorKind::ParseError,
            FileKitError::Io { .. } => ErrorKind::IoFailure,
            FileKitError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::ParseError => "PARSE_ERROR",
            ErrorKind::IoFailure => "IO_FAILURE",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

/// Convert an error to an appropriate exit code (sysexits.h where one fits)
pub fn to_exit_code(error: &FileKitError) -> i32 {
    match error.kind() {
        ErrorKind::NotFound => 2,
        ErrorKind::InvalidArgument => 64,
        ErrorKind::ParseError => 65,
        ErrorKind::IoFailure => 74,
    }
}
