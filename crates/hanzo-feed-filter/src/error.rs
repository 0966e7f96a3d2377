//! Error types for Hanzo Feed Filter
//!
//! The matching engine itself never fails; these errors come from loading
//! configuration and from mirroring directory trees.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for feed filter operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Feed filter error types
#[derive(Debug, Error)]
pub enum FilterError {
    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input root is missing or not a directory
    #[error("Input directory not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(String),

    /// IO error on a specific path
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FilterError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilterError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for FilterError {
    fn from(err: serde_yaml::Error) -> Self {
        FilterError::Config(err.to_string())
    }
}

impl From<walkdir::Error> for FilterError {
    fn from(err: walkdir::Error) -> Self {
        FilterError::Walk(err.to_string())
    }
}
