//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use std::path::PathBuf;

use serde::Deserialize;

use crate::antenna::report::DEFAULT_EXPORT_PATH;
use crate::antenna::{Assumptions, RawInputs};
use crate::error::ConfigError;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Initial values of the input fields.
    #[serde(default)]
    pub inputs: RawInputs,

    /// Directivity and efficiency assumptions.
    #[serde(default)]
    pub assumptions: Assumptions,

    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Assumptions {
            directivity,
            efficiency,
        } = self.assumptions;

        if !(directivity.is_finite() && directivity > 0.0) {
            return Err(ConfigError::ValidationError {
                field: "assumptions.directivity",
                message: format!("must be greater than 0, got {directivity}"),
            });
        }
        if !(efficiency.is_finite() && efficiency > 0.0 && efficiency <= 1.0) {
            return Err(ConfigError::ValidationError {
                field: "assumptions.efficiency",
                message: format!("must be in (0, 1], got {efficiency}"),
            });
        }
        if self.export.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "export.path",
                message: "must not be empty".to_string(),
            });
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logging.level",
                message: format!(
                    "'{}' is not one of: trace, debug, info, warn, error",
                    self.logging.level
                ),
            });
        }
        Ok(())
    }
}

/// Report export configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Destination of exported reports.
    /// Default: "antenna_output.txt"
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_PATH)
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
