//! Error types for mdwx library.
//!
//! The conversion itself never fails; these errors only come from reading
//! input files and theme configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdwx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mdwx library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The theme file could not be parsed.
    #[error("invalid theme: {0}")]
    Theme(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
