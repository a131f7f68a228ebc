//! Channel error types.

use relay_core::{ChannelKind, ValidationError};
use thiserror::Error;

/// Errors that can occur during channel operations.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// A construction precondition was violated.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// `send` was called without a message.
    #[error("No message provided")]
    MissingMessage,

    /// The requested channel kind has no implementation.
    #[error("Channel not implemented: {0}")]
    NotImplemented(ChannelKind),
}

impl ChannelError {
    /// Whether the error comes from bad caller input rather than a missing capability.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::MissingMessage)
    }
}
