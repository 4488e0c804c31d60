//! Error types for ytlink
//!
//! Accessors on [`YoutubeUrl`](crate::YoutubeUrl) never fail: an unrecognized
//! URL degrades to `None`. This enum backs the strict entry points
//! (`try_parse`, `validate`, `VideoId::from_str`) and serializes to its
//! human-readable message for Tauri command compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for strict ytlink operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YtlinkError {
    /// Hostname is neither `www.youtube.com` nor `youtu.be`
    #[error("Not a YouTube host: {0:?}")]
    InvalidHost(String),

    /// Neither the path nor the `v` parameter carries an 11-character id
    #[error("No video ID found in URL: {0}")]
    MissingVideoId(String),

    /// A string given as a video ID is not 11 characters of `[a-zA-Z0-9_-]`
    #[error("Invalid video ID: {0}")]
    InvalidVideoId(String),
}

impl Serialize for YtlinkError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for ytlink operations
pub type Result<T> = std::result::Result<T, YtlinkError>;
