//! User-Agent string sent with every index and file request.
//!
//! Some documentation hosts reject clients that do not look like a browser,
//! so all traffic uses the same conventional browser identification.

/// Browser User-Agent sent on every request.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
