//! Regular expressions for video IDs and start times

use std::sync::LazyLock;

use regex::Regex;

use crate::types::StartOffset;

/// Trailing path segment that is exactly one video ID
static ID_IN_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*/([a-zA-Z0-9_-]{11})$").expect("video ID path pattern is valid")
});

/// A bare video ID
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("video ID pattern is valid")
});

// Each unit is optional, so the empty string always matches at position 0.
static START_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]{1,2})h)?(?:([0-9]{1,2})m)?(?:([0-9]{1,2})s)?")
        .expect("start time pattern is valid")
});

/// Returns true if `s` is an 11-character video ID
pub(crate) fn is_video_id(s: &str) -> bool {
    VIDEO_ID.is_match(s)
}

/// Extracts the video ID from the last segment of a pathname
pub(crate) fn id_from_path(pathname: &str) -> Option<&str> {
    ID_IN_PATH
        .captures(pathname)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Result of matching a `t` parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StartTimeMatch {
    pub offset: StartOffset,
    /// The whole value is a time expression (e.g. "1h2m3s", not "90")
    pub complete: bool,
}

/// Matches a `t` value such as `1h2m3s`, `2m` or `45s`
///
/// Always succeeds: units absent from the leftmost match are zero.
pub(crate) fn match_start_time(value: &str) -> StartTimeMatch {
    let unit = |caps: &regex::Captures<'_>, index: usize| {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };

    match START_TIME.captures(value) {
        Some(caps) => {
            let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
            StartTimeMatch {
                offset: StartOffset {
                    hours: unit(&caps, 1),
                    minutes: unit(&caps, 2),
                    seconds: unit(&caps, 3),
                },
                complete: end == value.len(),
            }
        }
        None => StartTimeMatch {
            offset: StartOffset::default(),
            complete: value.is_empty(),
        },
    }
}
