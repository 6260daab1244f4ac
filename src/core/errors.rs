//! Shared error types for the crate

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for goalgauge operations
#[derive(Debug, Error)]
pub enum Error {
    /// A metrics operation was called with an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A snapshot or configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file did not parse as JSON
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
