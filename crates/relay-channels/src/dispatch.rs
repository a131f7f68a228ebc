//! Sequential delivery of a batch of messages.

use crate::traits::{Channel, SendResult};
use crate::Result;
use relay_core::Message;
use tracing::{debug, warn};

/// Send `messages` through `channel` one at a time, in order.
///
/// Each send completes before the next starts. The first failure aborts the
/// remaining sends and is returned as is.
pub async fn dispatch_all(channel: &dyn Channel, messages: &[Message]) -> Result<Vec<SendResult>> {
    let mut results = Vec::with_capacity(messages.len());

    for (index, message) in messages.iter().enumerate() {
        match channel.send(message).await {
            Ok(result) => {
                debug!(index, kind = message.kind_label(), "Message sent");
                results.push(result);
            }
            Err(e) => {
                warn!(
                    index,
                    remaining = messages.len() - index - 1,
                    error = %e,
                    "Dispatch aborted"
                );
                return Err(e);
            }
        }
    }

    Ok(results)
}
