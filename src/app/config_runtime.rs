//! Merge command-line flags with the config file into run settings.
//!
//! Precedence: command line > config file > built-in defaults.

use std::path::PathBuf;
use std::time::Duration;

use doc_mirror::constants::{DEFAULT_DELAY_MS, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS};
use doc_mirror::{FileConfig, HttpSettings, RunRequest};

use crate::cli::Args;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunSettings {
    pub(crate) request: RunRequest,
    pub(crate) http: HttpSettings,
    pub(crate) delay: Duration,
    pub(crate) log_level: &'static str,
}

pub(crate) fn resolve_run_settings(args: &Args, file_config: Option<&FileConfig>) -> RunSettings {
    let file_config = file_config.cloned().unwrap_or_default();
    let log_level = resolve_log_level(args, &file_config);

    let output_dir = args
        .output
        .clone()
        .or(file_config.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let follow_redirects = !args.no_follow_redirects && file_config.follow_redirects.unwrap_or(true);

    let timeout_secs = args
        .timeout_secs
        .or(file_config.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let delay_ms = args
        .delay_ms
        .or(file_config.delay_ms)
        .unwrap_or(DEFAULT_DELAY_MS);

    RunSettings {
        request: RunRequest {
            sources: args.selected_sources(),
            filter: args.filter.clone(),
            output_dir,
        },
        http: HttpSettings {
            timeout_secs,
            follow_redirects,
        },
        delay: Duration::from_millis(delay_ms),
        log_level,
    }
}

/// Priority: quiet flag > verbose flag > config verbosity > info.
/// `RUST_LOG`, when set, overrides all of these at subscriber init.
fn resolve_log_level(args: &Args, file_config: &FileConfig) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => file_config
            .verbosity
            .map_or("info", |verbosity| verbosity.log_level()),
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use doc_mirror::VerbositySetting;

    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["doc-mirror"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = resolve_run_settings(&parse(&[]), None);
        assert_eq!(
            settings.request.output_dir,
            PathBuf::from("gitignore/downloaded_docs")
        );
        assert!(settings.request.sources.is_empty());
        assert!(settings.request.filter.is_none());
        assert_eq!(settings.http, HttpSettings::default());
        assert_eq!(settings.delay, Duration::from_millis(500));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let config = FileConfig {
            output_dir: Some(PathBuf::from("from-config")),
            delay_ms: Some(0),
            timeout_secs: Some(90),
            follow_redirects: Some(false),
            verbosity: Some(VerbositySetting::Verbose),
        };
        let settings = resolve_run_settings(&parse(&[]), Some(&config));
        assert_eq!(settings.request.output_dir, PathBuf::from("from-config"));
        assert_eq!(settings.delay, Duration::ZERO);
        assert_eq!(settings.http.timeout_secs, 90);
        assert!(!settings.http.follow_redirects);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_config_output_dir_and_verbosity_both_apply() {
        let config = FileConfig {
            output_dir: Some(PathBuf::from("mirror-root")),
            verbosity: Some(VerbositySetting::Quiet),
            ..FileConfig::default()
        };
        let settings = resolve_run_settings(&parse(&[]), Some(&config));
        assert_eq!(settings.request.output_dir, PathBuf::from("mirror-root"));
        assert_eq!(settings.log_level, "error");
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = FileConfig {
            output_dir: Some(PathBuf::from("from-config")),
            delay_ms: Some(0),
            timeout_secs: Some(90),
            follow_redirects: Some(true),
            verbosity: Some(VerbositySetting::Debug),
        };
        let args = parse(&[
            "-o",
            "from-cli",
            "--delay-ms",
            "100",
            "--timeout-secs",
            "5",
            "--no-follow-redirects",
            "-q",
        ]);
        let settings = resolve_run_settings(&args, Some(&config));
        assert_eq!(settings.request.output_dir, PathBuf::from("from-cli"));
        assert_eq!(settings.delay, Duration::from_millis(100));
        assert_eq!(settings.http.timeout_secs, 5);
        assert!(!settings.http.follow_redirects);
        assert_eq!(settings.log_level, "error");
    }

    #[test]
    fn test_source_flags_and_filter_flow_into_request() {
        let settings = resolve_run_settings(&parse(&["--claude-docs", "-f", "api"]), None);
        assert_eq!(settings.request.sources, vec!["claude-docs".to_string()]);
        assert_eq!(settings.request.filter.as_deref(), Some("api"));
    }

    #[test]
    fn test_verbose_counts_map_to_levels() {
        assert_eq!(resolve_run_settings(&parse(&["-v"]), None).log_level, "debug");
        assert_eq!(resolve_run_settings(&parse(&["-vv"]), None).log_level, "trace");
    }
}
