//! Send a single message.

use super::report;
use crate::Context;
use chrono::TimeDelta;
use clap::Args;
use relay_channels::{ChannelError, SendResult};
use relay_core::{ChannelKind, MediaFile, Message, TextMessage, ValidationError, VideoMessage};

/// Send command arguments.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Channel kind (defaults to the configured one)
    #[arg(short, long)]
    pub kind: Option<ChannelKind>,

    /// Recipient (defaults to the configured one)
    #[arg(short, long)]
    pub to: Option<String>,

    /// Message text, or the caption when sending a video
    #[arg(long)]
    pub text: String,

    /// Video file as name.format
    #[arg(long, requires = "duration")]
    pub video: Option<MediaFile>,

    /// Video duration in seconds
    #[arg(long, requires = "video", allow_negative_numbers = true)]
    pub duration: Option<f64>,
}

impl SendArgs {
    /// Build the message described by the arguments.
    pub fn message(&self) -> Result<Message, ChannelError> {
        let message: Message = match (&self.video, self.duration) {
            (Some(file), Some(secs)) => VideoMessage::new(
                self.text.as_str(),
                file.name(),
                file.format(),
                duration_from_secs(secs)?,
            )?
            .into(),
            _ => TextMessage::new(self.text.as_str())?.into(),
        };
        Ok(message)
    }
}

/// Convert a user-supplied number of seconds to a span at nanosecond precision.
///
/// Non-positive input is reported with the value as given.
fn duration_from_secs(secs: f64) -> Result<TimeDelta, ValidationError> {
    if !secs.is_finite() {
        return Err(ValidationError::InvalidDuration(format!(
            "{} is not a finite number of seconds",
            secs
        )));
    }
    if secs <= 0.0 {
        return Err(ValidationError::NonPositiveDuration {
            secs: secs.to_string(),
        });
    }

    let nanos = (secs * 1e9).round();
    if nanos < 1.0 {
        return Err(ValidationError::InvalidDuration(format!(
            "{}s is shorter than one nanosecond",
            secs
        )));
    }
    if nanos >= i64::MAX as f64 {
        return Err(ValidationError::InvalidDuration(format!(
            "{}s is out of range",
            secs
        )));
    }
    Ok(TimeDelta::nanoseconds(nanos as i64))
}

/// Run the send command, reporting any failure through the sink.
pub async fn run(args: SendArgs, ctx: &Context) -> anyhow::Result<()> {
    report(ctx, send(&args, ctx).await);
    Ok(())
}

async fn send(args: &SendArgs, ctx: &Context) -> Result<SendResult, ChannelError> {
    let kind = args.kind.unwrap_or(ctx.config.channel.kind);
    let recipient = args.to.as_deref().unwrap_or(&ctx.config.channel.recipient);

    let channel = ctx.factory().create(kind, recipient)?;
    let message = args.message()?;
    channel.send(&message).await
}
