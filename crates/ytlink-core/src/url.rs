//! URL builders for YouTube
//!
//! Provides functions for building watch, embed, short and thumbnail URLs
//! from a video ID and a residual query string.

const WATCH_BASE: &str = "https://www.youtube.com/watch";
const EMBED_BASE: &str = "https://www.youtube.com/embed";
const SHORT_BASE: &str = "https://youtu.be";
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Builds the canonical watch URL
///
/// The `&` separator is always emitted, even when `residual` is empty.
///
/// # Arguments
/// * `id` - 11-character video ID
/// * `residual` - Serialized query string without a leading `?`
///
/// # Example
/// ```
/// use ytlink_core::url::build_canonical_url;
/// let url = build_canonical_url("dQw4w9WgXcQ", "list=PL1");
/// assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1");
/// ```
pub fn build_canonical_url(id: &str, residual: &str) -> String {
    format!("{}?v={}&{}", WATCH_BASE, id, residual)
}

/// Builds the embed URL
///
/// # Example
/// ```
/// use ytlink_core::url::build_embedding_url;
/// let url = build_embedding_url("dQw4w9WgXcQ", "");
/// assert_eq!(url, "https://www.youtube.com/embed/dQw4w9WgXcQ?");
/// ```
pub fn build_embedding_url(id: &str, residual: &str) -> String {
    format!("{}/{}?{}", EMBED_BASE, id, residual)
}

/// Builds the youtu.be short URL
///
/// # Example
/// ```
/// use ytlink_core::url::build_short_url;
/// let url = build_short_url("dQw4w9WgXcQ", "feature=share");
/// assert_eq!(url, "https://youtu.be/dQw4w9WgXcQ?feature=share");
/// ```
pub fn build_short_url(id: &str, residual: &str) -> String {
    format!("{}/{}?{}", SHORT_BASE, id, residual)
}

/// Builds the default thumbnail URL
///
/// # Example
/// ```
/// use ytlink_core::url::build_thumbnail_url;
/// let url = build_thumbnail_url("dQw4w9WgXcQ");
/// assert_eq!(url, "https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg");
/// ```
pub fn build_thumbnail_url(id: &str) -> String {
    format!("{}/{}/0.jpg", THUMBNAIL_BASE, id)
}
