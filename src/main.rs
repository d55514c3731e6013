//! CLI entry point for doc-mirror.

use anyhow::Result;

mod app;
mod cli;
mod output;

#[tokio::main]
async fn main() -> Result<()> {
    app::runtime::run_mirror().await
}
