//! Flat query-string codec
//!
//! Parses `a=1&b=2` into an insertion-ordered key/value map and serializes it
//! back. Only scalar values are supported: `a[b]=c` is kept as the literal key
//! `a[b]`.

use std::collections::HashMap;

/// Insertion-ordered map of decoded query parameters
///
/// Re-inserting an existing key replaces its value in place, so the last
/// occurrence of a duplicated key wins while its original position is kept.
/// Lookups and inserts go through a key index and stay constant-time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl QueryMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Inserts or overwrites `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Removes `key`, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.index.remove(key)?;
        for position in self.index.values_mut() {
            if *position > removed {
                *position -= 1;
            }
        }
        Some(self.entries.remove(removed).1)
    }

    /// Iterates over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses a query string into a [`QueryMap`]
///
/// A leading `?` is ignored. Keys and values are percent-decoded with `+`
/// treated as a space. A pair without `=` gets an empty value; pairs with an
/// empty key are dropped.
///
/// # Example
/// ```
/// use ytlink_core::query::parse_query;
/// let query = parse_query("?v=dQw4w9WgXcQ&list=a%20b");
/// assert_eq!(query.get("v"), Some("dQw4w9WgXcQ"));
/// assert_eq!(query.get("list"), Some("a b"));
/// ```
pub fn parse_query(search: &str) -> QueryMap {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut map = QueryMap::new();

    for pair in search.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };

        let key = decode_component(key);
        if key.is_empty() {
            continue;
        }
        map.insert(key, decode_component(value));
    }

    map
}

/// Serializes a [`QueryMap`] without a leading `?`
///
/// Everything outside the RFC 3986 unreserved set is percent-encoded.
///
/// # Example
/// ```
/// use ytlink_core::query::{parse_query, stringify_query};
/// let query = parse_query("list=a+b&index=2");
/// assert_eq!(stringify_query(&query), "list=a%20b&index=2");
/// ```
pub fn stringify_query(query: &QueryMap) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decodes one key or value; malformed escapes are left as-is
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
