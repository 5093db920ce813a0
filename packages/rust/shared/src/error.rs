//! Error types for marksmap.
//!
//! Library crates use [`MarksmapError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Only conditions that prevent producing any output are errors. Per-node
//! irregularities (missing titles, bad URIs) are recovered locally and never
//! surface here.

use std::path::PathBuf;

/// Top-level error type for all marksmap operations.
#[derive(Debug, thiserror::Error)]
pub enum MarksmapError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The bookmarks document is not valid JSON.
    #[error("malformed bookmarks JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The bookmarks document is valid JSON but cannot be converted at all.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MarksmapError>;

impl MarksmapError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create an invalid-input error from any displayable message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
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
