//! Defaults shared by the library and the CLI (timeouts, pacing, output root).

use std::time::Duration;

/// Default HTTP timeout for index and file requests (30 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default pause after each download attempt, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Upper bound accepted for the pacing delay (one minute).
pub const MAX_DELAY_MS: u64 = 60_000;

/// Upper bound accepted for the HTTP timeout (one hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum redirect hops followed before a request fails.
pub const MAX_REDIRECTS: usize = 10;

/// Default output root, a conventionally git-ignored artifacts directory.
pub const DEFAULT_OUTPUT_DIR: &str = "gitignore/downloaded_docs";

/// Default pacing delay as a [`Duration`].
#[must_use]
pub const fn default_delay() -> Duration {
    Duration::from_millis(DEFAULT_DELAY_MS)
}
