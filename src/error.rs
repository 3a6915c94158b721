//! Error types for patch-antenna configuration.
//!
//! Calculation and export errors live in [`crate::antenna::error`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration value for {field}: {message}")]
    ValidationError {
        /// Dotted path of the offending setting, e.g. `assumptions.efficiency`.
        field: &'static str,
        /// Description of the validation failure.
        message: String,
    },
}
