// Platform Configuration
//
// Sources: environment (SQLNET_*) or a JSON document.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::application::constants::{DEFAULT_LOG_FILTER, DEFAULT_TIME_EXECUTION};
use crate::error::{PlatformError, Result};

pub const ENV_TIME_EXECUTION: &str = "SQLNET_TIME_EXECUTION";
pub const ENV_LOG_FORMAT: &str = "SQLNET_LOG_FORMAT";
pub const ENV_LOG_FILTER: &str = "SQLNET_LOG";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Development: pretty formatting with colors
    #[default]
    Pretty,
    /// Production: JSON structured logging
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(PlatformError::Config(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

/// Runtime configuration of the platform layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Time every executed statement and log the running total
    pub time_execution: bool,
    pub log_format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            time_execution: DEFAULT_TIME_EXECUTION,
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PlatformConfig {
    /// Load from `SQLNET_*` environment variables
    ///
    /// Missing variables keep their defaults; invalid ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment stand-in for tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TIME_EXECUTION) {
            match parse_bool(&raw) {
                Some(v) => config.time_execution = v,
                None => warn!(key = ENV_TIME_EXECUTION, value = %raw, "Ignoring invalid boolean"),
            }
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => warn!(key = ENV_LOG_FORMAT, error = %e, "Ignoring invalid log format"),
            }
        }

        if let Some(filter) = lookup(ENV_LOG_FILTER).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(PlatformError::Config("log_filter must not be empty".to_string()));
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
