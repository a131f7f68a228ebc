//! # relay-core
//!
//! Core types, configuration, and capabilities for Relay.
//!
//! This crate provides the pieces shared by the channel and CLI crates:
//!
//! - **Types**: Message variants, recipient identifiers, and channel kinds
//! - **Capabilities**: The clock and output sink injected into channels
//! - **Configuration**: Loading and validation of the optional config file

pub mod clock;
pub mod config;
pub mod error;
pub mod sink;
pub mod types;

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{ConfigError, ValidationError};
pub use sink::{ConsoleSink, MemorySink, OutputSink};
pub use types::*;
