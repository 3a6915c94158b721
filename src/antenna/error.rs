//! Error types for antenna calculations and report export.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for antenna operations.
pub type AntennaResult<T> = Result<T, AntennaError>;

/// Errors that can occur while calculating or exporting an antenna design.
#[derive(Debug, Error)]
pub enum AntennaError {
    /// An input field is not a finite real number.
    #[error("Invalid input for {field}: '{value}' is not a valid number")]
    Parse {
        /// Human-readable field name.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// The input is numeric but outside a formula's mathematical domain.
    #[error("Invalid input for {quantity}: {message}")]
    Domain {
        /// The quantity being computed or validated.
        quantity: &'static str,
        /// Description of what's wrong.
        message: String,
    },

    /// Failed to write the exported report.
    #[error("Failed to write file: {path}")]
    FileWrite {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Export was requested before any successful calculation.
    #[error("Nothing to export: calculate a design first")]
    NothingToExport,
}

impl AntennaError {
    /// Creates a parse error.
    pub fn parse(field: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            field,
            value: value.into(),
        }
    }

    /// Creates a domain error.
    pub fn domain(quantity: &'static str, message: impl Into<String>) -> Self {
        Self::Domain {
            quantity,
            message: message.into(),
        }
    }

    /// Creates a file write error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for errors caused by the user's input values.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Domain { .. })
    }
}
