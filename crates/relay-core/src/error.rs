//! Error types for Relay core.

use std::path::PathBuf;
use thiserror::Error;

/// A violated construction precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message content cannot be empty")]
    EmptyContent,

    #[error("file name cannot be empty")]
    EmptyFileName,

    #[error("file format cannot be empty")]
    EmptyFileFormat,

    #[error("duration must be positive, got {secs}s")]
    NonPositiveDuration { secs: String },

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("recipient cannot be empty")]
    BlankRecipient,

    #[error("invalid recipient '{recipient}': {reason}")]
    MalformedRecipient { recipient: String, reason: String },
}

impl ValidationError {
    /// Create a malformed recipient error.
    pub fn malformed_recipient(recipient: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecipient {
            recipient: recipient.into(),
            reason: reason.into(),
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON5 parse error: {0}")]
    Json5(String),
}
