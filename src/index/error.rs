//! Error types for index fetching.
//!
//! None of these escape [`IndexFetcher`](super::IndexFetcher): a failing
//! source is logged and contributes zero links.

use thiserror::Error;

/// Errors that can occur while fetching or reading an index document.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Network-level error (DNS resolution, connection refused, TLS, body read).
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The index URL.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The index URL.
        url: String,
    },

    /// Non-success HTTP response.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The index URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The server answered with a redirect while redirect following is disabled.
    #[error("HTTP {status} redirect not followed for {url} (location: {})", .location.as_deref().unwrap_or("none"))]
    RedirectNotFollowed {
        /// The index URL.
        url: String,
        /// The redirect status code.
        status: u16,
        /// The `Location` header, if present.
        location: Option<String>,
    },

    /// The source's extraction pattern is not a valid regular expression.
    #[error("invalid extraction pattern for source {source_id}: {source}")]
    InvalidPattern {
        /// Identifier of the misconfigured source.
        source_id: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// The identifier is not present in the registry.
    #[error("unknown source: {id}")]
    UnknownSource {
        /// The unregistered identifier.
        id: String,
    },
}

impl IndexError {
    /// Creates a network or timeout error from a reqwest error.
    pub fn from_reqwest(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { url: url.into() }
        } else {
            Self::Network {
                url: url.into(),
                source,
            }
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a redirect-not-followed error.
    pub fn redirect_not_followed(
        url: impl Into<String>,
        status: u16,
        location: Option<String>,
    ) -> Self {
        Self::RedirectNotFollowed {
            url: url.into(),
            status,
            location,
        }
    }

    /// Creates an invalid-pattern error.
    pub fn invalid_pattern(source_id: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            source_id: source_id.into(),
            source,
        }
    }

    /// Creates an unknown-source error.
    pub fn unknown_source(id: impl Into<String>) -> Self {
        Self::UnknownSource { id: id.into() }
    }
}
