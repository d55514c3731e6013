//! Shared HTTP client construction for index and file requests.
//!
//! Both the index fetcher and the file downloader go through one client so
//! they stay consistent on timeout, User-Agent, compression and redirect
//! handling. Redirect hops are logged as they are followed.

use std::time::Duration;

use reqwest::redirect::{Attempt, Policy};
use reqwest::{Client, ClientBuilder};
use tracing::info;

use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_REDIRECTS};
use crate::user_agent::BROWSER_USER_AGENT;

/// Network settings applied to every request of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// Follow HTTP redirects (up to [`MAX_REDIRECTS`] hops).
    pub follow_redirects: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            follow_redirects: true,
        }
    }
}

impl HttpSettings {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Builds the HTTP client used for a run.
///
/// # Errors
///
/// Returns the underlying [`reqwest::Error`] when the TLS backend or system
/// configuration cannot be initialized.
pub fn build_http_client(settings: &HttpSettings) -> Result<Client, reqwest::Error> {
    base_builder(settings).build()
}

fn base_builder(settings: &HttpSettings) -> ClientBuilder {
    Client::builder()
        .timeout(settings.timeout())
        .user_agent(BROWSER_USER_AGENT)
        .gzip(true)
        .redirect(redirect_policy(settings.follow_redirects))
}

fn redirect_policy(follow_redirects: bool) -> Policy {
    if !follow_redirects {
        return Policy::none();
    }
    Policy::custom(log_and_follow)
}

fn log_and_follow(attempt: Attempt<'_>) -> reqwest::redirect::Action {
    if attempt.previous().len() > MAX_REDIRECTS {
        return attempt.error("too many redirects");
    }
    if let Some(from) = attempt.previous().last() {
        info!(
            from = %from,
            status = attempt.status().as_u16(),
            to = %attempt.url(),
            "Redirected"
        );
    }
    attempt.follow()
}
