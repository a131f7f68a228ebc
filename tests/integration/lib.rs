//! Shared fixtures for integration tests.

use chrono::{DateTime, Utc};
use relay_channels::ChannelFactory;
use relay_cli::Context;
use relay_core::{Config, ManualClock, MemorySink};
use std::sync::Arc;

/// Deterministic capabilities: a manual clock and an in-memory sink.
pub struct Harness {
    pub clock: Arc<ManualClock>,
    pub sink: MemorySink,
}

impl Harness {
    /// Harness whose clock starts at 2024-01-01T00:00:00Z.
    pub fn new() -> Self {
        let start = DateTime::<Utc>::from_timestamp(1_704_067_200, 0).unwrap_or_default();
        Self {
            clock: Arc::new(ManualClock::new(start)),
            sink: MemorySink::new(),
        }
    }

    pub fn factory(&self) -> ChannelFactory {
        ChannelFactory::new(self.clock.clone(), Arc::new(self.sink.clone()))
    }

    pub fn context(&self, config: Config) -> Context {
        Context::with_capabilities(config, self.clock.clone(), Arc::new(self.sink.clone()))
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
