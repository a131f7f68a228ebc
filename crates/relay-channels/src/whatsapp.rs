//! Simulated WhatsApp channel.
//!
//! No network I/O happens here. A send waits a fixed latency through the
//! injected [`Clock`], then writes the formatted line to the injected
//! [`OutputSink`].

use crate::base::ChannelBase;
use crate::traits::{Channel, SendResult};
use crate::Result;
use async_trait::async_trait;
use relay_core::{ChannelKind, Clock, Message, OutputSink, Recipient, ValidationError};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default simulated network latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// WhatsApp channel that simulates delivery.
pub struct SimulatedWhatsAppChannel {
    base: ChannelBase,
    latency: Duration,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn OutputSink>,
}

impl std::fmt::Debug for SimulatedWhatsAppChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedWhatsAppChannel")
            .field("recipient", self.base.recipient())
            .field("latency", &self.latency)
            .finish()
    }
}

impl SimulatedWhatsAppChannel {
    /// Create a new channel.
    ///
    /// The recipient must be non-blank and start with `+`.
    pub fn new(
        recipient: impl Into<String>,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn OutputSink>,
    ) -> Result<Self> {
        let base = ChannelBase::new(recipient)?;

        if !base.recipient().as_str().starts_with('+') {
            return Err(ValidationError::malformed_recipient(
                base.recipient().as_str(),
                "phone number must start with '+'",
            )
            .into());
        }

        Ok(Self {
            base,
            latency: DEFAULT_LATENCY,
            clock,
            sink,
        })
    }

    /// Set the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Recipient phone number with everything but digits removed.
    pub fn normalize_phone(&self) -> String {
        self.base
            .recipient()
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }
}

#[async_trait]
impl Channel for SimulatedWhatsAppChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::WhatsApp
    }

    fn recipient(&self) -> &Recipient {
        self.base.recipient()
    }

    async fn send(&self, message: &Message) -> Result<SendResult> {
        self.clock.sleep(self.latency).await;

        let timestamp = self.clock.now();
        let line = self.base.format_line(timestamp, message);
        self.sink.log(&line);

        debug!(
            phone = %self.normalize_phone(),
            kind = message.kind_label(),
            "Delivered simulated WhatsApp message"
        );

        Ok(SendResult {
            kind: ChannelKind::WhatsApp,
            recipient: self.base.recipient().clone(),
            timestamp,
            line,
        })
    }
}
