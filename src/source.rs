//! Registry of documentation sources.
//!
//! Each source is an `llms.txt`-style index document plus the pattern used to
//! pull Markdown links out of it. The built-in table is fixed at compile time;
//! [`Registry::new`] lets callers (tests, embedders) supply their own table.

/// One documentation source: where its index lives and how to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDescriptor<'a> {
    /// Short identifier, also used as the per-source output subdirectory.
    pub id: &'a str,
    /// Location of the index document.
    pub index_url: &'a str,
    /// Regular expression matching the file URLs listed in the index.
    pub pattern: &'a str,
    /// Human-readable name used in progress output.
    pub display_name: &'a str,
}

/// Built-in documentation sources, in the order they are fetched by default.
pub const SOURCES: &[SourceDescriptor<'static>] = &[
    SourceDescriptor {
        id: CLAUDE_DOCS,
        index_url: "https://docs.anthropic.com/llms.txt",
        pattern: r"https://docs\.claude\.com/[^\s\)]+\.md",
        display_name: "Claude Docs",
    },
    SourceDescriptor {
        id: CLAUDE_CODE,
        index_url: "https://code.claude.com/docs/llms.txt",
        pattern: r"https://[^\s\)]+\.md",
        display_name: "Claude Code Docs",
    },
];

/// Identifier of the Claude documentation source (docs.claude.com).
pub const CLAUDE_DOCS: &str = "claude-docs";

/// Identifier of the Claude Code documentation source (code.claude.com).
pub const CLAUDE_CODE: &str = "claude-code";

/// Read-only lookup table over a slice of source descriptors.
#[derive(Debug, Clone, Copy)]
pub struct Registry<'a> {
    sources: &'a [SourceDescriptor<'a>],
}

impl Default for Registry<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry<'static> {
    /// The built-in registry backed by [`SOURCES`].
    #[must_use]
    pub const fn builtin() -> Self {
        Self { sources: SOURCES }
    }
}

impl<'a> Registry<'a> {
    /// Wraps a caller-supplied table.
    #[must_use]
    pub const fn new(sources: &'a [SourceDescriptor<'a>]) -> Self {
        Self { sources }
    }

    /// Returns the descriptor registered under `id`, if any.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&'a SourceDescriptor<'a>> {
        self.sources.iter().find(|source| source.id == id)
    }

    /// All descriptors, in registration order.
    #[must_use]
    pub fn all(&self) -> &'a [SourceDescriptor<'a>] {
        self.sources
    }

    /// All identifiers, in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'a str> {
        self.sources.iter().map(|source| source.id).collect()
    }
}
