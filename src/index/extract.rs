//! Textual link extraction from index documents.

use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;

/// A file URL found in a source's index, tagged with that source.
///
/// Ordering is lexicographic by `(url, source_id)`, which is the order
/// downloads are attempted in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscoveredLink {
    /// Fully-qualified file URL.
    pub url: String,
    /// Identifier of the source whose index listed the URL.
    pub source_id: String,
}

impl DiscoveredLink {
    /// Creates a link from its parts.
    pub fn new(url: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source_id: source_id.into(),
        }
    }
}

impl fmt::Display for DiscoveredLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.url, self.source_id)
    }
}

/// Extracts every match of `pattern` from `body`, keeps those containing
/// `filter` (when given and non-empty), and tags them with `source_id`.
///
/// Repeated matches collapse because the result is a set.
#[must_use]
pub fn extract_links(
    body: &str,
    pattern: &Regex,
    filter: Option<&str>,
    source_id: &str,
) -> BTreeSet<DiscoveredLink> {
    let filter = filter.filter(|f| !f.is_empty());
    pattern
        .find_iter(body)
        .map(|mat| mat.as_str())
        .filter(|url| filter.is_none_or(|f| url.contains(f)))
        .map(|url| DiscoveredLink::new(url, source_id))
        .collect()
}
