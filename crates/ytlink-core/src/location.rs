//! URL decomposition
//!
//! Splits a raw string into hostname, pathname and search the way a browser
//! resolves an anchor's `href`: absolute URLs stand alone, scheme-relative and
//! relative references are resolved against a base URL.

use std::sync::LazyLock;

use url::Url;

static DEFAULT_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("file:///").expect("static base URL is valid"));

/// Components of a resolved URL
///
/// Mirrors the `hostname`, `pathname` and `search` properties of a browser
/// location. `search` carries no leading `?`. Every field is empty when the
/// input could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    /// Lower-cased host without port (e.g., "www.youtube.com")
    pub hostname: String,
    /// Percent-encoded path (e.g., "/watch")
    pub pathname: String,
    /// Raw query string without the `?`
    pub search: String,
}

impl From<&Url> for UrlParts {
    fn from(url: &Url) -> Self {
        Self {
            hostname: url.host_str().unwrap_or_default().to_string(),
            pathname: url.path().to_string(),
            search: url.query().unwrap_or_default().to_string(),
        }
    }
}

/// Splits a raw URL string into [`UrlParts`]
///
/// Implementations must not fail: unresolvable input yields empty parts.
pub trait UrlDecomposer {
    fn decompose(&self, raw: &str) -> UrlParts;
}

/// [`UrlDecomposer`] backed by the `url` crate (WHATWG URL parsing)
///
/// Relative references resolve against `base`. The default base is
/// `file:///`, whose empty host makes relative input decompose to an empty
/// hostname while still yielding its path and query.
#[derive(Debug, Clone)]
pub struct AnchorResolver {
    base: Url,
}

impl AnchorResolver {
    /// Create a resolver with the default `file:///` base
    pub fn new() -> Self {
        Self {
            base: DEFAULT_BASE.clone(),
        }
    }

    /// Create a resolver that resolves relative references against `base`
    ///
    /// # Example
    /// ```
    /// use ytlink_core::location::{AnchorResolver, UrlDecomposer};
    /// use url::Url;
    ///
    /// let base = Url::parse("https://www.youtube.com/feed").unwrap();
    /// let parts = AnchorResolver::with_base(base).decompose("/watch?v=dQw4w9WgXcQ");
    /// assert_eq!(parts.hostname, "www.youtube.com");
    /// assert_eq!(parts.search, "v=dQw4w9WgXcQ");
    /// ```
    pub fn with_base(base: Url) -> Self {
        Self { base }
    }

    /// Base URL used for relative references
    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl Default for AnchorResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlDecomposer for AnchorResolver {
    fn decompose(&self, raw: &str) -> UrlParts {
        match self.base.join(raw) {
            Ok(url) => UrlParts::from(&url),
            Err(error) => {
                tracing::debug!(
                    %error,
                    input = raw,
                    "URL could not be resolved, using empty parts"
                );
                UrlParts::default()
            }
        }
    }
}
