//! Index document fetching and link extraction.
//!
//! An index document (`llms.txt`) is plain text listing documentation URLs.
//! Links are pulled out with the source's regular expression in a single
//! pass; there is no HTML or Markdown parsing.
//!
//! # Example
//!
//! ```no_run
//! use doc_mirror::http::{HttpSettings, build_http_client};
//! use doc_mirror::index::IndexFetcher;
//! use doc_mirror::source::Registry;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = build_http_client(&HttpSettings::default())?;
//! let fetcher = IndexFetcher::new(client);
//! let links = fetcher
//!     .fetch_all(&Registry::builtin(), &["claude-code"], Some("sdk"))
//!     .await;
//! println!("{} links", links.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod extract;
mod fetcher;

pub use error::IndexError;
pub use extract::{DiscoveredLink, extract_links};
pub use fetcher::IndexFetcher;
