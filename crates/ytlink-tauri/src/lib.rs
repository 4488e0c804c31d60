//! ytlink Tauri Integration
//!
//! Provides a Tauri plugin exposing the YouTube URL parser to the frontend.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(ytlink_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Parse a URL into id, canonical/embed/short/thumbnail URLs and start offset
//! const info = await invoke('plugin:ytlink|parse_video_url', {
//!   url: 'https://youtu.be/dQw4w9WgXcQ?t=1m'
//! });
//!
//! // Render embed markup; omitted options fall back to their defaults
//! const html = await invoke('plugin:ytlink|get_iframe', {
//!   url: 'https://youtu.be/dQw4w9WgXcQ',
//!   options: { noCookie: true }
//! });
//! ```

use tauri::{
    plugin::{Builder, TauriPlugin},
    Runtime,
};

mod commands;

/// Name the plugin registers under (`plugin:ytlink|...`)
pub const PLUGIN_NAME: &str = "ytlink";

/// Initialize the ytlink plugin
///
/// The parser is stateless, so no managed state is registered.
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(ytlink_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::parse_video_url,
            commands::get_iframe
        ])
        .setup(|_app, _api| {
            tracing::debug!(plugin = PLUGIN_NAME, "ytlink plugin initialized");
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use ytlink_core::{IframeOptions, VideoUrlInfo};
