//! Configuration loading.

use super::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Upper bound on the simulated per-send latency.
pub const MAX_LATENCY_MS: u64 = 60_000;

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    ///
    /// A path that is given but missing is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.channel.recipient.trim().is_empty() {
            errors.push("Channel recipient must not be empty".to_string());
        }

        if self.channel.latency_ms > MAX_LATENCY_MS {
            errors.push(format!(
                "Channel latency {} ms exceeds maximum of {} ms",
                self.channel.latency_ms, MAX_LATENCY_MS
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
