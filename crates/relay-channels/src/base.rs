//! State and formatting shared by every channel implementation.

use crate::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use relay_core::{Message, Recipient};

/// Recipient storage and line formatting common to all channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBase {
    recipient: Recipient,
}

impl ChannelBase {
    /// Create a base for the given recipient, rejecting blank identifiers.
    pub fn new(recipient: impl Into<String>) -> Result<Self> {
        Ok(Self {
            recipient: Recipient::new(recipient)?,
        })
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Format an output line addressed to this base's recipient.
    pub fn format_line(&self, timestamp: DateTime<Utc>, message: &Message) -> String {
        format_line(timestamp, &self.recipient, message)
    }
}

/// Render `<timestamp> | To: <recipient> | <formatted message>`.
///
/// The timestamp is RFC 3339 UTC with millisecond precision.
pub fn format_line(timestamp: DateTime<Utc>, recipient: &Recipient, message: &Message) -> String {
    format!(
        "{} | To: {} | {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        recipient,
        message.formatted()
    )
}
