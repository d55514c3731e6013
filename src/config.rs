//! Optional TOML configuration file for CLI defaults.
//!
//! The file lives at `$XDG_CONFIG_HOME/doc-mirror/config.toml`, falling back
//! to `$HOME/.config/doc-mirror/config.toml`. Every key is optional, unknown
//! keys are rejected, and command-line flags always take precedence.
//!
//! ```toml
//! output_dir = "docs/mirror"
//! delay_ms = 250
//! timeout_secs = 60
//! follow_redirects = true
//! verbosity = "verbose"
//! ```

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{MAX_DELAY_MS, MAX_TIMEOUT_SECS};

const CONFIG_DIR_NAME: &str = "doc-mirror";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys / wrong types.
    #[error("failed to parse config file: {source}")]
    Parse {
        /// The TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// A value is outside its accepted range.
    #[error("invalid config value for `{field}`: {value}. Expected range: {expected}")]
    InvalidValue {
        /// Key name.
        field: &'static str,
        /// Offending value.
        value: u64,
        /// Accepted range, for the message.
        expected: &'static str,
    },
}

/// Supported config verbosity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbositySetting {
    Default,
    Verbose,
    Quiet,
    Debug,
}

impl VerbositySetting {
    /// Log filter directive for this verbosity.
    #[must_use]
    pub fn log_level(self) -> &'static str {
        match self {
            Self::Default => "info",
            Self::Verbose => "debug",
            Self::Quiet => "error",
            Self::Debug => "trace",
        }
    }
}

/// Values read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default output root.
    pub output_dir: Option<PathBuf>,
    /// Pause after each download attempt, in milliseconds.
    pub delay_ms: Option<u64>,
    /// HTTP timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Follow HTTP redirects.
    pub follow_redirects: Option<bool>,
    /// Default log verbosity.
    pub verbosity: Option<VerbositySetting>,
}

impl FileConfig {
    /// Validates values against the same ranges the CLI enforces.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(delay_ms) = self.delay_ms
            && delay_ms > MAX_DELAY_MS
        {
            return Err(ConfigError::InvalidValue {
                field: "delay_ms",
                value: delay_ms,
                expected: "0..=60000",
            });
        }
        if let Some(timeout_secs) = self.timeout_secs
            && !(1..=MAX_TIMEOUT_SECS).contains(&timeout_secs)
        {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                value: timeout_secs,
                expected: "1..=3600",
            });
        }
        Ok(())
    }
}

/// Loaded config metadata.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// Resolved config path, when a base directory is known.
    pub path: Option<PathBuf>,
    /// Parsed config, when the file exists.
    pub config: Option<FileConfig>,
}

/// Resolves the default config path from the environment.
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    config_path_from(
        env_var_non_empty_os("XDG_CONFIG_HOME"),
        env_var_non_empty_os("HOME"),
    )
}

fn config_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(xdg_config_home) = xdg_config_home {
        return Some(
            PathBuf::from(xdg_config_home)
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        );
    }

    let home = home?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads the config from the default path if the file exists.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file exists but cannot be read, parsed,
/// or validated. A missing file is not an error.
pub fn load_default_file_config() -> Result<LoadedConfig, ConfigError> {
    let path = resolve_default_config_path();
    let config = match path.as_deref() {
        Some(path) if path.exists() => Some(load_file_config(path)?),
        _ => None,
    };
    Ok(LoadedConfig { path, config })
}

/// Loads and validates a config file at an explicit path.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read, parsed, or validated.
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&raw)
}

fn parse_config_str(raw: &str) -> Result<FileConfig, ConfigError> {
    let config: FileConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config_str(
            r#"
output_dir = "mirror"
delay_ms = 250
timeout_secs = 60
follow_redirects = false
verbosity = "quiet"
"#,
        )
        .unwrap();

        assert_eq!(config.output_dir, Some(PathBuf::from("mirror")));
        assert_eq!(config.delay_ms, Some(250));
        assert_eq!(config.timeout_secs, Some(60));
        assert_eq!(config.follow_redirects, Some(false));
        assert_eq!(config.verbosity, Some(VerbositySetting::Quiet));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        assert_eq!(parse_config_str("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = parse_config_str("concurrency = 4");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = parse_config_str("delay_ms = \"slow\"");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_delay_over_max_is_rejected() {
        let err = parse_config_str("delay_ms = 60001").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("delay_ms"), "Expected field in: {msg}");
        assert!(msg.contains("60001"), "Expected value in: {msg}");
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = parse_config_str("timeout_secs = 0");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_verbosity_is_rejected() {
        assert!(parse_config_str("verbosity = \"loud\"").is_err());
    }

    #[test]
    fn test_verbosity_log_levels() {
        assert_eq!(VerbositySetting::Default.log_level(), "info");
        assert_eq!(VerbositySetting::Verbose.log_level(), "debug");
        assert_eq!(VerbositySetting::Quiet.log_level(), "error");
        assert_eq!(VerbositySetting::Debug.log_level(), "trace");
    }

    #[test]
    fn test_config_path_prefers_xdg_config_home() {
        let path = config_path_from(Some("/xdg".into()), Some("/home/u".into())).unwrap();
        assert_eq!(path, PathBuf::from("/xdg/doc-mirror/config.toml"));
    }

    #[test]
    fn test_config_path_falls_back_to_home() {
        let path = config_path_from(None, Some("/home/u".into())).unwrap();
        assert_eq!(path, PathBuf::from("/home/u/.config/doc-mirror/config.toml"));
    }

    #[test]
    fn test_config_path_none_without_env() {
        assert!(config_path_from(None, None).is_none());
    }

    #[test]
    fn test_load_file_config_reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "delay_ms = 0\n").unwrap();
        assert_eq!(load_file_config(&path).unwrap().delay_ms, Some(0));
    }

    #[test]
    fn test_load_file_config_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = load_file_config(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
