//! Messaging channel abstractions for Relay.
//!
//! This crate provides the channel trait, the simulated WhatsApp channel,
//! the factory that maps a [`ChannelKind`](relay_core::ChannelKind) to a
//! channel, and sequential dispatch of a batch of messages.

pub mod base;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod traits;
pub mod whatsapp;

pub use base::{format_line, ChannelBase};
pub use dispatch::dispatch_all;
pub use error::ChannelError;
pub use factory::ChannelFactory;
pub use traits::{Channel, SendResult};
pub use whatsapp::SimulatedWhatsAppChannel;

/// Result type for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;
