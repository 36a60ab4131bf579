//! Error types for octodoc.
//!
//! Library crates use [`OctodocError`] via `thiserror`.
//! The `octodoc` CLI wraps this with `color-eyre` for rich diagnostics; the
//! `md2m` extractor maps its failures to distinct process exit codes instead.

use std::path::PathBuf;

/// Top-level error type for all octodoc operations.
#[derive(Debug, thiserror::Error)]
pub enum OctodocError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input validation error (missing source directory, bad path, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, OctodocError>;

impl OctodocError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = OctodocError::config("could not determine home directory");
        assert_eq!(
            err.to_string(),
            "config error: could not determine home directory"
        );

        let err = OctodocError::validation("source directory 'src' does not exist");
        assert!(err.to_string().contains("source directory 'src'"));
    }
}
