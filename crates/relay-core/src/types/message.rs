//! Message variants and their formatting.
//!
//! Every message carries non-blank content and a UTC creation timestamp.
//! Messages are immutable once built; all validation happens in the
//! constructors, so a value of any of these types is always well-formed.

use crate::error::ValidationError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A message that can be sent through a channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// Plain text.
    Text(TextMessage),

    /// Video with a file reference and a duration.
    Video(VideoMessage),
}

impl Message {
    /// Build a text message stamped with the current time.
    pub fn text(content: impl Into<String>) -> Result<Self, ValidationError> {
        TextMessage::new(content).map(Self::Text)
    }

    /// Build a video message stamped with the current time.
    pub fn video(
        content: impl Into<String>,
        file_name: impl Into<String>,
        file_format: impl Into<String>,
        duration: TimeDelta,
    ) -> Result<Self, ValidationError> {
        VideoMessage::new(content, file_name, file_format, duration).map(Self::Video)
    }

    /// Get the message content.
    pub fn content(&self) -> &str {
        match self {
            Self::Text(m) => &m.content,
            Self::Video(m) => &m.content,
        }
    }

    /// Get the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Text(m) => m.created_at,
            Self::Video(m) => m.created_at,
        }
    }

    /// Short lowercase label for the variant.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Video(_) => "video",
        }
    }

    /// Tagged human-readable rendering of the message.
    pub fn formatted(&self) -> String {
        match self {
            Self::Text(m) => m.formatted(),
            Self::Video(m) => m.formatted(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl From<TextMessage> for Message {
    fn from(m: TextMessage) -> Self {
        Self::Text(m)
    }
}

impl From<VideoMessage> for Message {
    fn from(m: VideoMessage) -> Self {
        Self::Video(m)
    }
}

/// A plain text message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMessage {
    content: String,
    created_at: DateTime<Utc>,
}

impl TextMessage {
    /// Create a text message stamped with the current time.
    pub fn new(content: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new_at(content, Utc::now())
    }

    /// Create a text message with an explicit creation time.
    pub fn new_at(
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            content: non_blank(content.into(), ValidationError::EmptyContent)?,
            created_at,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Render as `[TEXT] <content>`.
    pub fn formatted(&self) -> String {
        format!("[TEXT] {}", self.content)
    }
}

/// File reference carried by media messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFile {
    name: String,
    format: String,
}

impl MediaFile {
    /// Create a file reference. Both parts must be non-blank.
    pub fn new(
        name: impl Into<String>,
        format: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank(name.into(), ValidationError::EmptyFileName)?,
            format: non_blank(format.into(), ValidationError::EmptyFileFormat)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl fmt::Display for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.format)
    }
}

/// Parses `name.format`, splitting on the last dot.
impl FromStr for MediaFile {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('.') {
            Some((name, format)) => Self::new(name, format),
            None => Self::new(s, ""),
        }
    }
}

/// A video message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoMessage {
    content: String,
    created_at: DateTime<Utc>,
    file: MediaFile,
    #[serde(rename = "duration_secs", serialize_with = "serialize_secs")]
    duration: TimeDelta,
}

impl VideoMessage {
    /// Create a video message stamped with the current time.
    pub fn new(
        content: impl Into<String>,
        file_name: impl Into<String>,
        file_format: impl Into<String>,
        duration: TimeDelta,
    ) -> Result<Self, ValidationError> {
        Self::new_at(content, file_name, file_format, duration, Utc::now())
    }

    /// Create a video message with an explicit creation time.
    pub fn new_at(
        content: impl Into<String>,
        file_name: impl Into<String>,
        file_format: impl Into<String>,
        duration: TimeDelta,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let content = non_blank(content.into(), ValidationError::EmptyContent)?;
        let file = MediaFile::new(file_name, file_format)?;

        if duration <= TimeDelta::zero() {
            return Err(ValidationError::NonPositiveDuration {
                secs: format_secs(duration),
            });
        }

        Ok(Self {
            content,
            created_at,
            file,
            duration,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn file(&self) -> &MediaFile {
        &self.file
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Duration in seconds. Exact up to the precision of `f64`.
    pub fn duration_secs(&self) -> f64 {
        match self.duration.num_nanoseconds() {
            Some(nanos) => nanos as f64 / 1e9,
            None => self.duration.num_seconds() as f64,
        }
    }

    /// Render as `[VIDEO] <content> | File: <name>.<format> | Duration: <secs>s`.
    pub fn formatted(&self) -> String {
        format!(
            "[VIDEO] {} | File: {} | Duration: {}s",
            self.content,
            self.file,
            format_secs(self.duration)
        )
    }
}

fn non_blank(value: String, err: ValidationError) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(err)
    } else {
        Ok(value)
    }
}

/// Render a span as decimal seconds at nanosecond precision, without
/// trailing zeros: `90`, `1.5`, `0.0004`, `-2`.
pub fn format_secs(d: TimeDelta) -> String {
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    let abs = d.abs();
    let secs = abs.num_seconds();
    let nanos = (abs - TimeDelta::seconds(secs))
        .num_nanoseconds()
        .unwrap_or(0);

    if nanos == 0 {
        format!("{}{}", sign, secs)
    } else {
        let frac = format!("{:09}", nanos);
        format!("{}{}.{}", sign, secs, frac.trim_end_matches('0'))
    }
}

fn serialize_secs<S: serde::Serializer>(d: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_secs(*d))
}
