//! Core types for Relay.

mod channel;
mod identifiers;
mod message;

pub use channel::*;
pub use identifiers::*;
pub use message::*;
