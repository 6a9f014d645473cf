//! Error types for the redirectmatter library
//!
//! Every fallible operation touches the filesystem, so most variants carry
//! the path that was being worked on when things went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum RedirectError {
    /// I/O failure on a specific path
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Source and destination resolve to the same directory
    #[error("Destination directory must be different from source: {path}")]
    SameDirectory { path: PathBuf },

    /// Destination exists but was not generated by this tool
    #[error("Refusing to overwrite {path} because {marker} is missing.")]
    MissingMarker { path: PathBuf, marker: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A date given on the command line is not `YYYY-MM-DD`
    #[error("Invalid date: {value} (expected YYYY-MM-DD)")]
    InvalidDate { value: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RedirectError>;

impl RedirectError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new same-directory error
    pub fn same_directory(path: impl Into<PathBuf>) -> Self {
        Self::SameDirectory { path: path.into() }
    }

    /// Create a new missing marker error
    pub fn missing_marker(path: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self::MissingMarker {
            path: path.into(),
            marker: marker.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }
}
