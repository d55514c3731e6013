//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use doc_mirror::source::{CLAUDE_CODE, CLAUDE_DOCS};

const EXAMPLES: &str = "\
Examples:
  doc-mirror                              # Download from both sources
  doc-mirror --claude-docs                # Only Claude docs (docs.claude.com)
  doc-mirror --claude-code                # Only Claude Code docs (code.claude.com)
  doc-mirror --filter agent-sdk           # Filter by pattern
  doc-mirror --no-follow-redirects        # Disable redirect following
  doc-mirror --output custom_docs         # Custom output directory";

/// Mirror documentation Markdown files listed in llms.txt indexes.
///
/// Files are saved as <output>/<source>/<url path>; files that already exist
/// are skipped, so reruns only fetch what is missing.
#[derive(Parser, Debug)]
#[command(name = "doc-mirror")]
#[command(author, version, about, after_help = EXAMPLES)]
pub struct Args {
    /// Only download URLs containing this text (e.g. "agent-sdk", "/docs/build-with-claude")
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output directory for downloaded files [default: gitignore/downloaded_docs]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include Claude documentation (docs.claude.com)
    #[arg(long)]
    pub claude_docs: bool,

    /// Include Claude Code documentation (code.claude.com)
    #[arg(long)]
    pub claude_code: bool,

    /// Disable following HTTP redirects (redirects are followed by default)
    #[arg(long)]
    pub no_follow_redirects: bool,

    /// Pause after each download in milliseconds (0-60000) [default: 500]
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=60000))]
    pub delay_ms: Option<u64>,

    /// HTTP timeout in seconds (1-3600) [default: 30]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub timeout_secs: Option<u64>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Sources selected by flag, in registry order. Empty means "all".
    pub fn selected_sources(&self) -> Vec<String> {
        let mut sources = Vec::new();
        if self.claude_docs {
            sources.push(CLAUDE_DOCS.to_string());
        }
        if self.claude_code {
            sources.push(CLAUDE_CODE.to_string());
        }
        sources
    }
}
