//! Error types for the download module.
//!
//! This module defines structured errors for path mapping and file
//! downloads, with enough context (URL, path) for a useful log line.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while downloading a single file.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Connection, TLS, or body-read failure.
    #[error("network error downloading {url}: {source}")]
    Network {
        /// Requested document URL.
        url: String,
        /// Transport error from reqwest.
        #[source]
        source: reqwest::Error,
    },

    /// The configured HTTP timeout elapsed.
    #[error("timeout downloading {url}")]
    Timeout {
        /// Requested document URL.
        url: String,
    },

    /// HTTP error response (including redirects that were not followed).
    #[error("HTTP {status} downloading {url}")]
    HttpStatus {
        /// Requested document URL.
        url: String,
        /// Non-success status code.
        status: u16,
    },

    /// File system error while creating directories or writing the file.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// Target file or directory.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
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

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while mapping a URL to its local target path.
#[derive(Debug, Error)]
pub enum PathError {
    /// The URL could not be parsed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// The URL has no path segments to map to a file name.
    #[error("URL has no file path: {url}")]
    EmptyPath {
        /// The pathless URL.
        url: String,
    },

    /// A `.` or `..` segment would resolve outside the source directory.
    #[error("unsafe path segment {segment:?} in {url}")]
    UnsafeSegment {
        /// The offending URL.
        url: String,
        /// The rejected segment.
        segment: String,
    },

    /// The target directory chain could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl PathError {
    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates an empty-path error.
    pub fn empty_path(url: impl Into<String>) -> Self {
        Self::EmptyPath { url: url.into() }
    }

    /// Creates an unsafe-segment error.
    pub fn unsafe_segment(url: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::UnsafeSegment {
            url: url.into(),
            segment: segment.into(),
        }
    }

    /// Creates a directory-creation error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }
}

// No `From<reqwest::Error>` / `From<std::io::Error>` impls: every variant
// needs the URL or path the source error lacks.
