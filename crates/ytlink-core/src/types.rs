//! Core data types for ytlink
//!
//! Contains the value types produced by parsing a YouTube URL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YtlinkError;
use crate::parser::patterns::is_video_id;

/// An 11-character YouTube video identifier (`[a-zA-Z0-9_-]{11}`)
///
/// Construction always validates, so holding a `VideoId` means the string is
/// well-formed. Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Length of every YouTube video ID
    pub const LEN: usize = 11;

    /// Returns the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for VideoId {
    type Err = YtlinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_video_id(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(YtlinkError::InvalidVideoId(s.to_string()))
        }
    }
}

impl TryFrom<String> for VideoId {
    type Error = YtlinkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_video_id(&value) {
            Ok(Self(value))
        } else {
            Err(YtlinkError::InvalidVideoId(value))
        }
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Playback start offset parsed from the `t` query parameter (e.g. `1h2m3s`)
///
/// Units missing from the expression are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartOffset {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl StartOffset {
    /// Offset expressed in seconds
    pub fn total_seconds(&self) -> u32 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }
}

/// Snapshot of every artifact derived from a valid YouTube URL
///
/// Produced by [`YoutubeUrl::info`](crate::YoutubeUrl::info).
/// All fields implement Serialize and Deserialize for Tauri compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoUrlInfo {
    /// 11-character video ID (e.g., "dQw4w9WgXcQ")
    pub id: VideoId,

    /// `https://www.youtube.com/watch?v={id}&{residual}`
    pub canonical_url: String,

    /// `https://www.youtube.com/embed/{id}?{residual}`
    pub embedding_url: String,

    /// `https://youtu.be/{id}?{residual}`
    pub short_url: String,

    /// `https://img.youtube.com/vi/{id}/0.jpg`
    pub thumbnail_url: String,

    /// Start offset in seconds, 0 when the URL carried no `t`
    pub start_at_second: u32,
}
