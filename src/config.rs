//! Checker configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use power_play_rules::UnknownCellPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How reports are printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration for the win checker.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Treatment of cell codes other than 0, 1 and 2.
    unknown_cells: UnknownCellPolicy,

    /// Report format when none is given on the command line.
    format: OutputFormat,

    /// Log filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            unknown_cells: UnknownCellPolicy::default(),
            format: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl CheckerConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(unknown_cells: UnknownCellPolicy, format: OutputFormat) -> Self {
        Self {
            unknown_cells,
            format,
            log_filter: default_log_filter(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(unknown_cells = %config.unknown_cells, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if a path is given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
