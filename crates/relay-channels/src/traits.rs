//! Core channel trait.

use crate::error::ChannelError;
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relay_core::{ChannelKind, Message, Recipient};
use std::fmt::Debug;

/// A delivery capability bound to one recipient.
#[async_trait]
pub trait Channel: Send + Sync + Debug {
    /// Get the channel kind.
    fn kind(&self) -> ChannelKind;

    /// Get the recipient this channel delivers to.
    fn recipient(&self) -> &Recipient;

    /// Deliver a message.
    async fn send(&self, message: &Message) -> Result<SendResult>;

    /// Deliver a message that may be absent.
    ///
    /// Fails with [`ChannelError::MissingMessage`] before any delivery when
    /// `message` is `None`.
    async fn send_optional(&self, message: Option<&Message>) -> Result<SendResult> {
        match message {
            Some(message) => self.send(message).await,
            None => Err(ChannelError::MissingMessage),
        }
    }
}

/// Result from sending a message.
#[derive(Debug, Clone, PartialEq)]
pub struct SendResult {
    /// Channel that performed the delivery.
    pub kind: ChannelKind,

    /// Recipient the message went to.
    pub recipient: Recipient,

    /// Timestamp written into the output line.
    pub timestamp: DateTime<Utc>,

    /// The emitted line.
    pub line: String,
}
