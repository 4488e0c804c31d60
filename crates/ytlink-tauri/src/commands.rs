//! Tauri commands for the ytlink URL parser
//!
//! This module contains all Tauri command implementations.

use ytlink_core::{IframeOptions, VideoUrlInfo, YoutubeUrl};

/// Parse a YouTube URL and return every derived artifact
///
/// # Arguments
/// * `url` - Candidate YouTube video URL
///
/// # Returns
/// ID, canonical/embed/short/thumbnail URLs and start offset
///
/// # Errors
/// Returns error message as String if the URL is not a recognized YouTube video URL
#[tauri::command]
pub fn parse_video_url(url: String) -> Result<VideoUrlInfo, String> {
    let parsed = YoutubeUrl::try_parse(&url).map_err(|e| e.to_string())?;
    parsed
        .info()
        .ok_or_else(|| format!("No video ID found in URL: {}", url))
}

/// Render iframe markup for a YouTube URL
///
/// # Arguments
/// * `url` - Candidate YouTube video URL
/// * `options` - Optional iframe settings; missing fields use their defaults
///
/// # Returns
/// Responsive `<iframe>` HTML block
///
/// # Errors
/// Returns error message as String if the URL is not a recognized YouTube video URL
#[tauri::command]
pub fn get_iframe(url: String, options: Option<IframeOptions>) -> Result<String, String> {
    let parsed = YoutubeUrl::try_parse(&url).map_err(|e| e.to_string())?;
    let options = options.unwrap_or_default();
    parsed
        .iframe(&options)
        .ok_or_else(|| format!("No video ID found in URL: {}", url))
}
