//! Iframe markup for embedding a video

use serde::{Deserialize, Serialize};

const EMBED_DOMAIN: &str = "www.youtube.com";
const NO_COOKIE_DOMAIN: &str = "www.youtube-nocookie.com";

/// Options for [`YoutubeUrl::iframe`](crate::YoutubeUrl::iframe)
///
/// Missing fields take their defaults when deserialized, so a frontend can
/// send `{ "noCookie": true }` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IframeOptions {
    /// Emit the `allowfullscreen` attribute (default: true)
    pub allow_full_screen: bool,
    /// Value of the `frameborder` attribute (default: 0)
    pub frame_border: u32,
    /// Accepted for compatibility. The responsive container is always emitted.
    pub responsive: bool,
    /// Embed from www.youtube-nocookie.com (default: false)
    pub no_cookie: bool,
}

impl Default for IframeOptions {
    fn default() -> Self {
        Self {
            allow_full_screen: true,
            frame_border: 0,
            responsive: true,
            no_cookie: false,
        }
    }
}

impl IframeOptions {
    /// Domain the iframe `src` points at
    pub fn domain(&self) -> &'static str {
        if self.no_cookie {
            NO_COOKIE_DOMAIN
        } else {
            EMBED_DOMAIN
        }
    }
}

/// Renders the responsive iframe block
///
/// The `src` always carries `rel=0` and `start`; no other query parameters
/// from the source URL are forwarded.
pub(crate) fn render_iframe(id: &str, start_at_second: u32, options: &IframeOptions) -> String {
    let full_screen = if options.allow_full_screen {
        "allowfullscreen"
    } else {
        ""
    };

    format!(
        "<div class=\"embed-responsive embed-responsive-16by9\">\n        \
         <iframe class=\"embed-responsive-item\" type=\"text/html\"\n        \
         src=\"https://{domain}/embed/{id}?rel=0&amp;start={start}\"\n        \
         frameborder=\"{border}\" {full_screen}></iframe>\n        \
         </div>",
        domain = options.domain(),
        id = id,
        start = start_at_second,
        border = options.frame_border,
        full_screen = full_screen,
    )
}
