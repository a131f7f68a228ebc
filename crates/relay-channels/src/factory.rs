//! Channel factory.
//!
//! Maps a [`ChannelKind`] to a concrete channel. Dispatch is a closed `match`:
//! supporting a new kind means adding an arm here.

use crate::error::ChannelError;
use crate::traits::Channel;
use crate::whatsapp::{SimulatedWhatsAppChannel, DEFAULT_LATENCY};
use crate::Result;
use relay_core::config::ChannelSettings;
use relay_core::{ChannelKind, Clock, OutputSink};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Builds channels that share one clock and one output sink.
#[derive(Clone)]
pub struct ChannelFactory {
    clock: Arc<dyn Clock>,
    sink: Arc<dyn OutputSink>,
    latency: Duration,
}

impl std::fmt::Debug for ChannelFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelFactory")
            .field("latency", &self.latency)
            .finish()
    }
}

impl ChannelFactory {
    /// Create a factory with the default latency.
    pub fn new(clock: Arc<dyn Clock>, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            clock,
            sink,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Create a factory using the latency from configuration.
    pub fn from_config(
        settings: &ChannelSettings,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self::new(clock, sink).with_latency(Duration::from_millis(settings.latency_ms))
    }

    /// Set the simulated latency for channels created from now on.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Create a channel of the given kind for `recipient`.
    ///
    /// Unimplemented kinds fail before the recipient is looked at.
    pub fn create(&self, kind: ChannelKind, recipient: &str) -> Result<Box<dyn Channel>> {
        let channel: Box<dyn Channel> = match kind {
            ChannelKind::WhatsApp => Box::new(
                SimulatedWhatsAppChannel::new(recipient, self.clock.clone(), self.sink.clone())?
                    .with_latency(self.latency),
            ),
            ChannelKind::Telegram | ChannelKind::Facebook | ChannelKind::Instagram => {
                return Err(ChannelError::NotImplemented(kind));
            }
        };

        info!(kind = %kind, recipient = %channel.recipient(), "Created channel");
        Ok(channel)
    }
}
