//! Single-file downloader.
//!
//! [`FileDownloader`] fetches one file and writes its body as UTF-8 text to
//! a target path, creating parent directories as needed and overwriting any
//! existing file at that path.

use std::path::Path;

use reqwest::Client;
use tracing::{debug, info, instrument};

use super::error::DownloadError;

/// HTTP downloader for documentation files.
///
/// Designed to be created once per run and reused for every file, sharing
/// the connection pool with the index fetcher.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use doc_mirror::download::FileDownloader;
/// use doc_mirror::http::{HttpSettings, build_http_client};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let downloader = FileDownloader::new(build_http_client(&HttpSettings::default())?);
/// let bytes = downloader
///     .download("https://example.com/docs/intro.md", Path::new("./out/intro.md"))
///     .await?;
/// println!("wrote {bytes} bytes");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileDownloader {
    client: Client,
}

impl FileDownloader {
    /// Creates a downloader around a client built by
    /// [`build_http_client`](crate::http::build_http_client).
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Downloads `url` and writes the body to `local_path`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError`] if:
    /// - The request fails (network error, timeout)
    /// - The server returns a non-success status
    /// - Creating the parent directory or writing the file fails
    #[instrument(skip(self, local_path), fields(url = %url))]
    pub async fn download(&self, url: &str, local_path: &Path) -> Result<usize, DownloadError> {
        info!("Downloading");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DownloadError::from_reqwest(url, e))?;

        if let Some(parent) = local_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::io(parent, e))?;
        }

        tokio::fs::write(local_path, body.as_bytes())
            .await
            .map_err(|e| DownloadError::io(local_path, e))?;

        debug!(bytes = body.len(), "body written");
        info!(path = %local_path.display(), "Saved");
        Ok(body.len())
    }
}
