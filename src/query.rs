//! Query targets: the request URL built from a search term.

use std::fmt;

/// Hacker News search endpoint; the encoded term is appended verbatim.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// A fully built request destination for one search term.
///
/// Immutable once constructed. The orchestrator keeps the last submitted
/// target as the "active" one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTarget {
    term: String,
    url: String,
}

impl QueryTarget {
    /// Build a target from an endpoint prefix and a raw search term.
    ///
    /// Surrounding whitespace is dropped. Returns `None` when nothing is
    /// left: a query with no filter is never sent.
    pub fn new(endpoint: &str, term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        let url = format!("{endpoint}{}", urlencoding::encode(term));
        Some(Self {
            term: term.to_string(),
            url,
        })
    }

    /// The search term this target was built from.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for QueryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Recover the search term from a URL built against `endpoint`.
///
/// Returns `None` if the URL was not built from that endpoint or does not
/// decode as UTF-8.
pub fn extract_search_term(endpoint: &str, url: &str) -> Option<String> {
    let encoded = url.strip_prefix(endpoint)?;
    urlencoding::decode(encoded).ok().map(|term| term.into_owned())
}
