//! ytlink Core Library
//!
//! Parses YouTube video URLs and derives canonical, embed, short and
//! thumbnail URLs plus ready-to-paste iframe markup.
//!
//! # Overview
//!
//! This crate provides:
//! - A fail-soft URL interpreter: malformed or foreign URLs never error,
//!   every accessor simply returns `None`
//! - Start offset parsing from `t=1h2m3s` style parameters
//! - Strict entry points (`try_parse`, `FromStr`) for callers that want a reason
//!
//! # Example
//!
//! ```
//! use ytlink_core::{IframeOptions, YoutubeUrl};
//!
//! let url = YoutubeUrl::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1&t=1m");
//!
//! assert_eq!(url.id(), Some("dQw4w9WgXcQ"));
//! assert_eq!(
//!     url.canonical_url().as_deref(),
//!     Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1")
//! );
//! assert_eq!(url.start_at_second(), Some(60));
//!
//! let options = IframeOptions { no_cookie: true, ..IframeOptions::default() };
//! let html = url.iframe(&options).unwrap();
//! assert!(html.contains("www.youtube-nocookie.com/embed/dQw4w9WgXcQ?rel=0&amp;start=60"));
//! ```
//!
//! # Recognized hosts
//!
//! Only `www.youtube.com` and `youtu.be` are accepted, compared exactly after
//! the usual host lower-casing. `m.youtube.com`, `youtube.com` and
//! `www.youtube-nocookie.com` are all rejected.

mod embed;
mod error;
pub mod location;
mod parser;
mod proptests;
pub mod query;
mod types;
pub mod url;

// Re-export error types
pub use error::{Result, YtlinkError};

// Re-export the interpreter
pub use parser::{VALID_HOSTS, YoutubeUrl};

// Re-export embed configuration
pub use embed::IframeOptions;

// Re-export collaborators
pub use location::{AnchorResolver, UrlDecomposer, UrlParts};
pub use query::QueryMap;

// Re-export data types
pub use types::{StartOffset, VideoId, VideoUrlInfo};
