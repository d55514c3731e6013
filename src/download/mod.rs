//! File downloads and local path mapping.
//!
//! # Features
//!
//! - Deterministic URL → local path mapping under a per-source directory
//! - Intermediate directories created on demand
//! - Structured error types with full context
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use doc_mirror::download::{FileDownloader, to_local_path};
//! use doc_mirror::http::{HttpSettings, build_http_client};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "https://code.claude.com/docs/en/overview.md";
//! let target = to_local_path(url, Path::new("downloads"), "claude-code")?;
//! let downloader = FileDownloader::new(build_http_client(&HttpSettings::default())?);
//! downloader.download(url, &target).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod path;

pub use client::FileDownloader;
pub use error::{DownloadError, PathError};
pub use path::to_local_path;
