//! Command implementations.

pub mod channels;
pub mod demo;
pub mod send;

use crate::Context;

/// Report a failed run once through the sink.
///
/// Errors are not propagated, so the process still exits successfully.
pub(crate) fn report<T, E: std::fmt::Display>(ctx: &Context, result: Result<T, E>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "Run failed");
        ctx.sink.log(&format!("Error: {}", e));
    }
}
