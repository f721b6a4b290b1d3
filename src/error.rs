//! Error types for the settings reconciliation tool.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem and document errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at the top level of {}", .0.display())]
    NotAnObject(PathBuf),

    #[error("Failed to serialize settings: {0}")]
    Serialize(String),
}

impl StorageError {
    /// Attach a path to an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Command-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not determine repository root: {0}")]
    RepoRootNotFound(String),

    #[error("{0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
