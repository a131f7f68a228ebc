//! Built-in demo: sends a fixed list of messages through the configured channel.

use super::report;
use crate::Context;
use chrono::TimeDelta;
use relay_channels::{dispatch_all, ChannelError, SendResult};
use relay_core::Message;
use tracing::info;

/// Line written before anything is sent.
pub const START_LINE: &str = "Starting Relay message dispatch demo";

/// The demo's message list.
pub fn demo_messages() -> Result<Vec<Message>, ChannelError> {
    Ok(vec![
        Message::text("Hello! This is a text message.")?,
        Message::video(
            "Check out this tutorial",
            "tutorial",
            "mp4",
            TimeDelta::seconds(120),
        )?,
    ])
}

/// Run the demo, reporting any failure through the sink.
pub async fn run(ctx: &Context) -> anyhow::Result<()> {
    ctx.sink.log(START_LINE);
    report(ctx, send_all(ctx).await);
    Ok(())
}

async fn send_all(ctx: &Context) -> Result<Vec<SendResult>, ChannelError> {
    let settings = &ctx.config.channel;
    let channel = ctx.factory().create(settings.kind, &settings.recipient)?;
    let messages = demo_messages()?;

    let results = dispatch_all(channel.as_ref(), &messages).await?;
    info!(count = results.len(), "Demo messages sent");
    Ok(results)
}
