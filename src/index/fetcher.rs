//! Index fetching and aggregation across sources.

use std::collections::BTreeSet;

use regex::Regex;
use reqwest::Client;
use reqwest::header::LOCATION;
use tracing::{debug, info, instrument, warn};

use super::error::IndexError;
use super::extract::{DiscoveredLink, extract_links};
use crate::source::{Registry, SourceDescriptor};

/// Fetches index documents and turns them into [`DiscoveredLink`] sets.
///
/// Failures never propagate: a source whose index cannot be fetched or read
/// is logged and contributes an empty set, so one broken source does not
/// stop the others.
#[derive(Debug, Clone)]
pub struct IndexFetcher {
    client: Client,
}

impl IndexFetcher {
    /// Creates a fetcher around a client built by
    /// [`build_http_client`](crate::http::build_http_client).
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches one source's index and extracts its links.
    ///
    /// Returns an empty set on any network, HTTP or pattern error.
    #[instrument(level = "debug", skip(self, source), fields(source = source.id))]
    pub async fn fetch(
        &self,
        source: &SourceDescriptor<'_>,
        filter: Option<&str>,
    ) -> BTreeSet<DiscoveredLink> {
        info!(url = source.index_url, "Fetching URLs");
        match self.try_fetch(source, filter).await {
            Ok(links) => {
                info!(
                    count = links.len(),
                    source = source.display_name,
                    "Found URLs"
                );
                links
            }
            Err(error) => {
                warn!(%error, source = source.display_name, "Index fetch failed, skipping source");
                BTreeSet::new()
            }
        }
    }

    async fn try_fetch(
        &self,
        source: &SourceDescriptor<'_>,
        filter: Option<&str>,
    ) -> Result<BTreeSet<DiscoveredLink>, IndexError> {
        let pattern = Regex::new(source.pattern)
            .map_err(|e| IndexError::invalid_pattern(source.id, e))?;

        let response = self
            .client
            .get(source.index_url)
            .send()
            .await
            .map_err(|e| IndexError::from_reqwest(source.index_url, e))?;

        if response.url().as_str() != source.index_url {
            info!(url = %response.url(), "Final URL");
        }

        let status = response.status();
        if status.is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            return Err(IndexError::redirect_not_followed(
                source.index_url,
                status.as_u16(),
                location,
            ));
        }
        if !status.is_success() {
            return Err(IndexError::http_status(source.index_url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| IndexError::from_reqwest(source.index_url, e))?;
        debug!(bytes = body.len(), "index body received");

        Ok(extract_links(&body, &pattern, filter, source.id))
    }

    /// Fetches every source in `ids` and unions the results.
    ///
    /// The same URL listed by two sources yields two links; unknown
    /// identifiers are logged and skipped.
    pub async fn fetch_all(
        &self,
        registry: &Registry<'_>,
        ids: &[&str],
        filter: Option<&str>,
    ) -> BTreeSet<DiscoveredLink> {
        let mut all_links = BTreeSet::new();

        for id in ids {
            let Some(source) = registry.lookup(id) else {
                warn!(error = %IndexError::unknown_source(*id), "Skipping source");
                continue;
            };
            let links = self.fetch(source, filter).await;
            all_links.extend(links);
        }

        all_links
    }
}
