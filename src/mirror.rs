//! Run orchestration: resolve sources, aggregate links, download, tally.
//!
//! A run moves through four stages in order and never retries:
//!
//! 1. resolve the requested sources (all registered sources when none given)
//! 2. aggregate their links into one deduplicated set
//! 3. download each link in `(url, source_id)` order, skipping existing files
//! 4. summarize the successful / skipped / failed counters
//!
//! Per-link failures are counted, never propagated. The only run-level
//! error is an output root that cannot be created.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::constants::default_delay;
use crate::download::{FileDownloader, to_local_path};
use crate::http::{HttpSettings, build_http_client};
use crate::index::IndexFetcher;
use crate::source::Registry;

/// Errors that abort a run before any file is downloaded.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The shared HTTP client could not be built.
    #[error("failed to build HTTP client: {source}")]
    Client {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The output root could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        /// The output root.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// What to mirror in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    /// Source identifiers to fetch; empty means every registered source.
    pub sources: Vec<String>,
    /// Keep only URLs containing this literal substring.
    pub filter: Option<String>,
    /// Output root; files land in `<output_dir>/<source_id>/...`.
    pub output_dir: PathBuf,
}

/// Counters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files downloaded and written.
    pub successful: usize,
    /// Links whose target already existed.
    pub skipped: usize,
    /// Links whose download or write failed.
    pub failed: usize,
    /// Number of unique links aggregated across sources.
    pub found: usize,
    /// Output root used for the run.
    pub output_dir: PathBuf,
}

impl RunSummary {
    fn empty(output_dir: &Path) -> Self {
        Self {
            successful: 0,
            skipped: 0,
            failed: 0,
            found: 0,
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Total links processed (successful + skipped + failed).
    #[must_use]
    pub fn processed(&self) -> usize {
        self.successful + self.skipped + self.failed
    }

    /// True when aggregation found nothing and the run ended early.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.found == 0
    }
}

/// Resolves the source list: the explicit selection, or every registered
/// source when the selection is empty.
#[must_use]
pub fn resolve_sources<'a>(registry: &Registry<'a>, selected: &'a [String]) -> Vec<&'a str> {
    if selected.is_empty() {
        registry.ids()
    } else {
        selected.iter().map(String::as_str).collect()
    }
}

/// Mirrors documentation sources to disk.
#[derive(Debug, Clone)]
pub struct Mirror<'r> {
    registry: Registry<'r>,
    fetcher: IndexFetcher,
    downloader: FileDownloader,
    settings: HttpSettings,
    delay: Duration,
}

impl Mirror<'static> {
    /// Creates a mirror over the built-in registry.
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Client`] when the HTTP client cannot be built.
    pub fn new(settings: HttpSettings) -> Result<Self, MirrorError> {
        Self::with_registry(Registry::builtin(), settings)
    }
}

impl<'r> Mirror<'r> {
    /// Creates a mirror over a caller-supplied registry.
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Client`] when the HTTP client cannot be built.
    pub fn with_registry(registry: Registry<'r>, settings: HttpSettings) -> Result<Self, MirrorError> {
        let client =
            build_http_client(&settings).map_err(|source| MirrorError::Client { source })?;
        Ok(Self {
            registry,
            fetcher: IndexFetcher::new(client.clone()),
            downloader: FileDownloader::new(client),
            settings,
            delay: default_delay(),
        })
    }

    /// Sets the pause taken after each download attempt.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Executes one run.
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::OutputDir`] when the output root cannot be
    /// created. Every per-link failure is counted in the summary instead.
    pub async fn run(&self, request: &RunRequest) -> Result<RunSummary, MirrorError> {
        let sources = resolve_sources(&self.registry, &request.sources);
        let filter = request.filter.as_deref();

        info!(sources = %sources.join(", "), "Sources");
        info!(
            enabled = self.settings.follow_redirects,
            "Redirect following"
        );
        if let Some(filter) = filter {
            info!(filter, "Filtering URLs");
        }

        let links = self.fetcher.fetch_all(&self.registry, &sources, filter).await;
        info!(count = links.len(), "Found unique URLs to download");

        if links.is_empty() {
            info!("No URLs found. Exiting.");
            return Ok(RunSummary::empty(&request.output_dir));
        }

        tokio::fs::create_dir_all(&request.output_dir)
            .await
            .map_err(|source| MirrorError::OutputDir {
                path: request.output_dir.clone(),
                source,
            })?;

        let mut summary = RunSummary::empty(&request.output_dir);
        summary.found = links.len();

        for (index, link) in links.iter().enumerate() {
            let position = format!("{}/{}", index + 1, summary.found);

            let local_path =
                match to_local_path(&link.url, &request.output_dir, &link.source_id) {
                    Ok(path) => path,
                    Err(error) => {
                        warn!(%position, %error, "Cannot map URL to a local path");
                        summary.failed += 1;
                        continue;
                    }
                };

            if local_path.exists() {
                info!(%position, path = %local_path.display(), "Skipping (already exists)");
                summary.skipped += 1;
                continue;
            }

            info!(%position, url = %link.url, source = %link.source_id, "Processing");
            match self.downloader.download(&link.url, &local_path).await {
                Ok(_) => summary.successful += 1,
                Err(error) => {
                    warn!(%position, %error, "Download failed");
                    summary.failed += 1;
                }
            }

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        Ok(summary)
    }
}
