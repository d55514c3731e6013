//! doc-mirror core library
//!
//! Mirrors the Markdown files listed in documentation indexes (`llms.txt`)
//! to local disk, one subdirectory per source, preserving each URL's path.
//!
//! # Architecture
//!
//! - [`source`] - Static registry of documentation sources
//! - [`index`] - Index fetching, link extraction, and aggregation
//! - [`download`] - Local path mapping and single-file downloads
//! - [`mirror`] - Run orchestration and the final tally
//! - [`http`] - Shared HTTP client policy (timeout, User-Agent, redirects)
//! - [`config`] - Optional TOML configuration file

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constants;
pub mod download;
pub mod http;
pub mod index;
pub mod mirror;
pub mod source;
mod user_agent;

// Re-export commonly used types
pub use config::{ConfigError, FileConfig, LoadedConfig, VerbositySetting};
pub use download::{DownloadError, FileDownloader, PathError, to_local_path};
pub use http::{HttpSettings, build_http_client};
pub use index::{DiscoveredLink, IndexError, IndexFetcher, extract_links};
pub use mirror::{Mirror, MirrorError, RunRequest, RunSummary, resolve_sources};
pub use source::{Registry, SOURCES, SourceDescriptor};
pub use user_agent::BROWSER_USER_AGENT;
