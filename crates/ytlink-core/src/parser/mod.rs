//! YouTube URL interpreter
//!
//! [`YoutubeUrl`] decomposes a raw string once and exposes derived artifacts
//! (canonical, embed, short and thumbnail URLs, start offset, iframe markup).
//! Every accessor goes through [`YoutubeUrl::is_valid`] and returns `None`
//! for anything that is not a recognized YouTube video URL.

pub(crate) mod patterns;

use std::fmt;
use std::str::FromStr;

use crate::embed::{IframeOptions, render_iframe};
use crate::error::{Result, YtlinkError};
use crate::location::{AnchorResolver, UrlDecomposer, UrlParts};
use crate::query::{QueryMap, parse_query, stringify_query};
use crate::types::{StartOffset, VideoId, VideoUrlInfo};
use crate::url::{
    build_canonical_url, build_embedding_url, build_short_url, build_thumbnail_url,
};

/// Hostnames accepted by [`YoutubeUrl::is_valid`], compared exactly
pub const VALID_HOSTS: [&str; 2] = ["www.youtube.com", "youtu.be"];

/// A parsed, immutable YouTube URL
///
/// Construction never fails; malformed input simply yields an invalid value.
///
/// # Example
/// ```
/// use ytlink_core::YoutubeUrl;
///
/// let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ?t=1h2m3s");
/// assert!(url.is_valid());
/// assert_eq!(url.id(), Some("dQw4w9WgXcQ"));
/// assert_eq!(url.start_at_second(), Some(3723));
/// assert_eq!(url.short_url().as_deref(), Some("https://youtu.be/dQw4w9WgXcQ?"));
///
/// let other = YoutubeUrl::parse("https://vimeo.com/12345678901");
/// assert_eq!(other.canonical_url(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeUrl {
    raw: String,
    parts: UrlParts,
    query: QueryMap,
    id: Option<VideoId>,
    residual_query: String,
    start_offset: Option<StartOffset>,
}

impl YoutubeUrl {
    /// Parses `url` with the default [`AnchorResolver`]
    pub fn parse(url: &str) -> Self {
        Self::parse_with(url, &AnchorResolver::default())
    }

    /// Parses `url`, decomposing it with a caller-supplied [`UrlDecomposer`]
    pub fn parse_with<D: UrlDecomposer + ?Sized>(url: &str, decomposer: &D) -> Self {
        let parts = decomposer.decompose(url);
        let query = parse_query(&parts.search);

        // Path segment first, then the `v` parameter
        let id = patterns::id_from_path(&parts.pathname)
            .or_else(|| query.get("v").filter(|v| patterns::is_video_id(v)))
            .and_then(|id| id.parse::<VideoId>().ok());

        let mut residual = query.clone();
        residual.remove("watch");
        residual.remove("v");

        let start_offset = query.get("t").map(|t| {
            let matched = patterns::match_start_time(t);
            if matched.complete {
                residual.remove("t");
            }
            matched.offset
        });

        let residual_query = stringify_query(&residual);

        tracing::trace!(
            host = %parts.hostname,
            id = ?id.as_ref().map(VideoId::as_str),
            residual = %residual_query,
            "parsed YouTube URL"
        );

        Self {
            raw: url.to_string(),
            parts,
            query,
            id,
            residual_query,
            start_offset,
        }
    }

    /// Parses `url` and rejects anything [`is_valid`](Self::is_valid) would refuse
    ///
    /// # Errors
    /// - `InvalidHost` if the hostname is not `www.youtube.com` or `youtu.be`
    /// - `MissingVideoId` if no video ID could be extracted
    pub fn try_parse(url: &str) -> Result<Self> {
        let parsed = Self::parse(url);
        if let Err(error) = parsed.validate() {
            tracing::debug!(%error, input = url, "rejected YouTube URL");
            return Err(error);
        }
        Ok(parsed)
    }

    /// Explains why this URL is (in)valid
    ///
    /// The host check runs before the ID check.
    pub fn validate(&self) -> Result<&VideoId> {
        if !VALID_HOSTS.contains(&self.parts.hostname.as_str()) {
            return Err(YtlinkError::InvalidHost(self.parts.hostname.clone()));
        }
        self.id
            .as_ref()
            .ok_or_else(|| YtlinkError::MissingVideoId(self.raw.clone()))
    }

    /// Returns true iff the host is recognized and a video ID was found
    pub fn is_valid(&self) -> bool {
        self.validated_id().is_some()
    }

    fn validated_id(&self) -> Option<&VideoId> {
        self.validate().ok()
    }

    // -----------------------------------------------------------------------
    // Derived accessors
    // -----------------------------------------------------------------------

    /// Video ID
    pub fn id(&self) -> Option<&str> {
        self.validated_id().map(VideoId::as_str)
    }

    /// Video ID as a typed value
    pub fn video_id(&self) -> Option<&VideoId> {
        self.validated_id()
    }

    /// `https://www.youtube.com/watch?v={id}&{residual}`
    pub fn canonical_url(&self) -> Option<String> {
        self.validated_id()
            .map(|id| build_canonical_url(id.as_str(), &self.residual_query))
    }

    /// `https://www.youtube.com/embed/{id}?{residual}`
    pub fn embedding_url(&self) -> Option<String> {
        self.validated_id()
            .map(|id| build_embedding_url(id.as_str(), &self.residual_query))
    }

    /// `https://youtu.be/{id}?{residual}`
    pub fn short_url(&self) -> Option<String> {
        self.validated_id()
            .map(|id| build_short_url(id.as_str(), &self.residual_query))
    }

    /// Start offset in seconds
    ///
    /// A valid URL without a `t` parameter reports `Some(0)`, not `None`.
    pub fn start_at_second(&self) -> Option<u32> {
        self.validated_id()?;
        Some(
            self.start_offset
                .map(|offset| offset.total_seconds())
                .unwrap_or(0),
        )
    }

    /// `https://img.youtube.com/vi/{id}/0.jpg`
    pub fn thumbnail_url(&self) -> Option<String> {
        self.validated_id()
            .map(|id| build_thumbnail_url(id.as_str()))
    }

    /// Responsive `<iframe>` markup for embedding the video
    ///
    /// The embed `src` carries only `rel=0` and `start`; the residual query
    /// is not forwarded.
    pub fn iframe(&self, options: &IframeOptions) -> Option<String> {
        let id = self.validated_id()?;
        let start = self.start_at_second().unwrap_or(0);
        Some(render_iframe(id.as_str(), start, options))
    }

    /// Snapshot of every derived artifact
    pub fn info(&self) -> Option<VideoUrlInfo> {
        let id = self.validated_id()?;
        Some(VideoUrlInfo {
            id: id.clone(),
            canonical_url: build_canonical_url(id.as_str(), &self.residual_query),
            embedding_url: build_embedding_url(id.as_str(), &self.residual_query),
            short_url: build_short_url(id.as_str(), &self.residual_query),
            thumbnail_url: build_thumbnail_url(id.as_str()),
            start_at_second: self.start_at_second().unwrap_or(0),
        })
    }

    // -----------------------------------------------------------------------
    // Raw parts
    // -----------------------------------------------------------------------

    /// The string this value was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn hostname(&self) -> &str {
        &self.parts.hostname
    }

    pub fn pathname(&self) -> &str {
        &self.parts.pathname
    }

    /// Decoded query parameters as they appeared in the input
    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    /// Query string reused by the derived URLs, without `watch`, `v` or a
    /// consumed `t`
    pub fn residual_query(&self) -> &str {
        &self.residual_query
    }

    /// Parsed `t` parameter, if the URL had one
    pub fn start_offset(&self) -> Option<StartOffset> {
        self.start_offset
    }
}

impl FromStr for YoutubeUrl {
    type Err = YtlinkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl fmt::Display for YoutubeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICK: &str = "dQw4w9WgXcQ";

    // -----------------------------------------------------------------------
    // Validity
    // -----------------------------------------------------------------------

    #[test]
    fn test_watch_url_is_valid() {
        let url = YoutubeUrl::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert!(url.is_valid());
        assert_eq!(url.id(), Some(RICK));
    }

    #[test]
    fn test_short_url_is_valid() {
        let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ");
        assert!(url.is_valid());
        assert_eq!(url.id(), Some(RICK));
    }

    #[test]
    fn test_embed_path_is_valid() {
        let url = YoutubeUrl::parse("https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(url.id(), Some(RICK));
    }

    #[test]
    fn test_uppercase_host_is_normalized() {
        let url = YoutubeUrl::parse("https://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ");
        assert!(url.is_valid());
    }

    #[test]
    fn test_other_hosts_are_invalid() {
        for input in [
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://music.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
            "https://vimeo.com/dQw4w9WgXcQ",
        ] {
            let url = YoutubeUrl::parse(input);
            assert!(!url.is_valid(), "{input} should be invalid");
            assert_eq!(url.id(), None);
        }
    }

    #[test]
    fn test_missing_id_is_invalid() {
        let url = YoutubeUrl::parse("https://www.youtube.com/watch?v=short");
        assert!(!url.is_valid());
        assert_eq!(url.canonical_url(), None);
    }

    #[test]
    fn test_scheme_relative_input_is_valid() {
        let url = YoutubeUrl::parse("//youtu.be/dQw4w9WgXcQ?t=5s");
        assert_eq!(url.hostname(), "youtu.be");
        assert!(url.is_valid());
        assert_eq!(url.start_at_second(), Some(5));
        assert_eq!(
            url.short_url().as_deref(),
            Some("https://youtu.be/dQw4w9WgXcQ?")
        );
    }

    #[test]
    fn test_many_query_params() {
        let params = (0..50_000)
            .map(|i| format!("k{i}=1"))
            .collect::<Vec<_>>()
            .join("&");
        let url = YoutubeUrl::parse(&format!("https://youtu.be/dQw4w9WgXcQ?{params}&t=1m"));
        assert_eq!(url.id(), Some(RICK));
        assert_eq!(url.start_at_second(), Some(60));
        assert_eq!(url.query().len(), 50_001);
        assert!(url.residual_query().ends_with("&k49999=1"));
    }

    #[test]
    fn test_relative_input_is_invalid() {
        let url = YoutubeUrl::parse("/watch?v=dQw4w9WgXcQ");
        assert_eq!(url.hostname(), "");
        assert!(!url.is_valid());
    }

    #[test]
    fn test_garbage_never_panics() {
        for input in ["", "   ", "::::", "http://", "%%%", "youtu.be", "\u{0}"] {
            let url = YoutubeUrl::parse(input);
            assert!(!url.is_valid());
            assert_eq!(url.iframe(&IframeOptions::default()), None);
        }
    }

    // -----------------------------------------------------------------------
    // ID extraction order
    // -----------------------------------------------------------------------

    #[test]
    fn test_path_id_wins_over_query() {
        let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ?v=AAAAAAAAAAA");
        assert_eq!(url.id(), Some(RICK));
    }

    #[test]
    fn test_query_id_used_when_path_has_none() {
        let url =
            YoutubeUrl::parse("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ");
        assert_eq!(url.id(), Some(RICK));
    }

    #[test]
    fn test_invalid_v_is_ignored() {
        let url = YoutubeUrl::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ123");
        assert_eq!(url.id(), None);
    }

    // -----------------------------------------------------------------------
    // Residual query
    // -----------------------------------------------------------------------

    #[test]
    fn test_canonical_url_plain() {
        let url = YoutubeUrl::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(
            url.canonical_url().as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ&")
        );
        assert_eq!(url.residual_query(), "");
    }

    #[test]
    fn test_watch_key_removed() {
        let url = YoutubeUrl::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ&watch=1");
        assert!(!url.residual_query().contains("watch"));
        assert_eq!(url.query().get("watch"), Some("1"));
    }

    #[test]
    fn test_residual_keeps_other_params() {
        let url = YoutubeUrl::parse(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123&index=2",
        );
        assert_eq!(url.residual_query(), "list=PL123&index=2");
        assert_eq!(
            url.embedding_url().as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?list=PL123&index=2")
        );
        assert_eq!(
            url.short_url().as_deref(),
            Some("https://youtu.be/dQw4w9WgXcQ?list=PL123&index=2")
        );
    }

    #[test]
    fn test_residual_reencodes_values() {
        let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ?si=a+b%2Fc");
        assert_eq!(url.residual_query(), "si=a%20b%2Fc");
    }

    #[test]
    fn test_valid_t_consumed() {
        let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ?t=1h2m3s");
        assert_eq!(url.residual_query(), "");
        assert_eq!(
            url.short_url().as_deref(),
            Some("https://youtu.be/dQw4w9WgXcQ?")
        );
    }

    #[test]
    fn test_unparsable_t_kept() {
        let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ?t=90");
        assert_eq!(url.residual_query(), "t=90");
        assert_eq!(url.start_at_second(), Some(0));
    }

    // -----------------------------------------------------------------------
    // Start offset
    // -----------------------------------------------------------------------

    #[test]
    fn test_start_at_second() {
        let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ?t=1h2m3s");
        assert_eq!(url.start_at_second(), Some(3723));
        assert_eq!(
            url.start_offset(),
            Some(StartOffset {
                hours: 1,
                minutes: 2,
                seconds: 3
            })
        );
    }

    #[test]
    fn test_start_at_second_without_t_is_zero() {
        let url = YoutubeUrl::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(url.start_offset(), None);
        assert_eq!(url.start_at_second(), Some(0));
    }

    #[test]
    fn test_start_at_second_invalid_url_is_none() {
        let url = YoutubeUrl::parse("https://example.com/watch?v=dQw4w9WgXcQ&t=5s");
        assert_eq!(url.start_at_second(), None);
        assert!(url.start_offset().is_some());
    }

    // -----------------------------------------------------------------------
    // Thumbnail & iframe
    // -----------------------------------------------------------------------

    #[test]
    fn test_thumbnail_url() {
        let url = YoutubeUrl::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(
            url.thumbnail_url().as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg")
        );
    }

    #[test]
    fn test_iframe_default_domain() {
        let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ");
        let html = url.iframe(&IframeOptions::default()).unwrap();
        assert!(
            html.contains("src=\"https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&amp;start=0\"")
        );
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn test_iframe_no_cookie_domain() {
        let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ");
        let options = IframeOptions {
            no_cookie: true,
            ..IframeOptions::default()
        };
        let html = url.iframe(&options).unwrap();
        assert!(html.contains("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_iframe_ignores_residual_query() {
        let url = YoutubeUrl::parse("https://youtu.be/dQw4w9WgXcQ?list=PL1&t=2m");
        let html = url.iframe(&IframeOptions::default()).unwrap();
        assert!(html.contains("?rel=0&amp;start=120\""));
        assert!(!html.contains("list=PL1"));
    }

    // -----------------------------------------------------------------------
    // Strict API
    // -----------------------------------------------------------------------

    #[test]
    fn test_try_parse_ok() {
        let url = YoutubeUrl::try_parse("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(url.id(), Some(RICK));
    }

    #[test]
    fn test_try_parse_invalid_host() {
        let result = YoutubeUrl::try_parse("https://example.com/dQw4w9WgXcQ");
        match result {
            Err(YtlinkError::InvalidHost(host)) => assert_eq!(host, "example.com"),
            other => panic!("Expected InvalidHost error, got {other:?}"),
        }
    }

    #[test]
    fn test_try_parse_missing_id() {
        let result = YoutubeUrl::try_parse("https://www.youtube.com/feed/trending");
        match result {
            Err(YtlinkError::MissingVideoId(raw)) => {
                assert_eq!(raw, "https://www.youtube.com/feed/trending")
            }
            other => panic!("Expected MissingVideoId error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_str() {
        let url: YoutubeUrl = "https://youtu.be/dQw4w9WgXcQ".parse().unwrap();
        assert_eq!(url.to_string(), "https://youtu.be/dQw4w9WgXcQ");
        assert!("not a url".parse::<YoutubeUrl>().is_err());
    }

    #[test]
    fn test_info_snapshot() {
        let url =
            YoutubeUrl::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1m&list=PL1");
        let info = url.info().unwrap();
        assert_eq!(info.id.as_str(), RICK);
        assert_eq!(info.canonical_url, url.canonical_url().unwrap());
        assert_eq!(info.embedding_url, url.embedding_url().unwrap());
        assert_eq!(info.short_url, url.short_url().unwrap());
        assert_eq!(info.thumbnail_url, url.thumbnail_url().unwrap());
        assert_eq!(info.start_at_second, 60);
    }

    #[test]
    fn test_info_none_when_invalid() {
        assert_eq!(YoutubeUrl::parse("https://example.com").info(), None);
    }

    // -----------------------------------------------------------------------
    // Injected decomposer
    // -----------------------------------------------------------------------

    struct FixedParts(UrlParts);

    impl UrlDecomposer for FixedParts {
        fn decompose(&self, _raw: &str) -> UrlParts {
            self.0.clone()
        }
    }

    #[test]
    fn test_parse_with_custom_decomposer() {
        let decomposer = FixedParts(UrlParts {
            hostname: "youtu.be".to_string(),
            pathname: "/dQw4w9WgXcQ".to_string(),
            search: "t=10s".to_string(),
        });
        let url = YoutubeUrl::parse_with("anything", &decomposer);
        assert_eq!(url.raw(), "anything");
        assert_eq!(url.id(), Some(RICK));
        assert_eq!(url.start_at_second(), Some(10));
    }
}
