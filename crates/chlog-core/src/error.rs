//! Error types for chlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chlog operations
#[derive(Error, Debug)]
pub enum ChlogError {
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The changelog path could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// Result type alias for chlog operations
pub type Result<T> = std::result::Result<T, ChlogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_error_names_path() {
        let err = ChlogError::Open {
            path: PathBuf::from("CHANGELOG.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("CHANGELOG.md"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_io_error_from() {
        let err: ChlogError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, ChlogError::Io(_)));
    }
}
