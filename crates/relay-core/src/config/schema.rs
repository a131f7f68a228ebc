//! Configuration schema definitions.

use crate::types::ChannelKind;
use serde::{Deserialize, Serialize};

/// Main Relay configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Channel used by the demo and as the default for `send`.
    #[serde(default)]
    pub channel: ChannelSettings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Channel selection and simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSettings {
    /// Channel kind.
    #[serde(default)]
    pub kind: ChannelKind,

    /// Recipient identifier.
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// Simulated network latency per send, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            kind: ChannelKind::default(),
            recipient: default_recipient(),
            latency_ms: default_latency_ms(),
        }
    }
}

fn default_recipient() -> String {
    "+5511999999999".to_string()
}

fn default_latency_ms() -> u64 {
    500
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default)]
    pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Name usable in a tracing filter directive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}
