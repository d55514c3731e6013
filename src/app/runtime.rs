use anyhow::{Context, Result};
use clap::Parser;
use doc_mirror::{Mirror, config};
use tracing::debug;

use crate::app::{config_runtime, terminal};
use crate::cli::Args;
use crate::output;

pub(crate) async fn run_mirror() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    let loaded = config::load_default_file_config().context("Failed to load configuration")?;
    let settings = config_runtime::resolve_run_settings(&args, loaded.config.as_ref());

    terminal::init_tracing(settings.log_level);

    debug!(?args, "CLI arguments parsed");
    if let Some(path) = loaded.path.as_deref().filter(|_| loaded.config.is_some()) {
        debug!(path = %path.display(), "Loaded config file");
    }

    let mirror = Mirror::new(settings.http)
        .context("Failed to initialize HTTP client")?
        .with_delay(settings.delay);

    let summary = mirror.run(&settings.request).await.with_context(|| {
        format!(
            "Failed to prepare output directory {}",
            settings.request.output_dir.display()
        )
    })?;

    if !summary.is_empty() {
        output::print_summary(&summary);
    }

    Ok(())
}
