//! Error types for the mega-calculator crate.
//!
//! Arithmetic itself never fails; errors only arise while configuring and
//! starting the front ends.

use std::path::PathBuf;

use thiserror::Error;

/// Errors related to loading and validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::config::ServerConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Host and port do not form a valid socket address.
    #[error("invalid bind address: {0}")]
    InvalidAddress(String),

    /// Unknown log level name.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// A unified error type for the entire crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for mega-calculator operations.
pub type Result<T> = std::result::Result<T, Error>;
