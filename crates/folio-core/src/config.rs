//! Configuration for Folio.
//!
//! Folio keeps a small directory for optional user files:
//!
//! ```text
//! ~/.folio/
//! ├── .env.local    # Optional environment overrides
//! ├── content.json  # Optional replacement profile
//! └── logs/         # Log output while the terminal viewer runs
//! ```
//!
//! # Environment Variables
//!
//! - `FOLIO_CONFIG_DIR`: Override the config directory
//! - `FOLIO_CONTENT`: Path to a profile JSON file
//! - `FOLIO_SCROLL_THRESHOLD`: Offset above which the nav condenses (default 50)
//! - `FOLIO_REVEAL_INTERVAL_MS`: Delay between typed characters (default 150)
//! - `FOLIO_FRAME_INTERVAL_MS`: Viewer event poll interval (default 50)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::controller::{ControllerSettings, DEFAULT_REVEAL_INTERVAL, DEFAULT_SCROLL_THRESHOLD};

/// Environment variable for a custom config directory.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// Environment variable for a replacement profile.
pub const CONTENT_ENV: &str = "FOLIO_CONTENT";

pub const SCROLL_THRESHOLD_ENV: &str = "FOLIO_SCROLL_THRESHOLD";
pub const REVEAL_INTERVAL_ENV: &str = "FOLIO_REVEAL_INTERVAL_MS";
pub const FRAME_INTERVAL_ENV: &str = "FOLIO_FRAME_INTERVAL_MS";

/// Default config directory name under home.
const DEFAULT_CONFIG_DIR: &str = ".folio";

const LOGS_SUBDIR: &str = "logs";

/// Default viewer poll interval.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Get the Folio config directory.
///
/// Determined by:
/// 1. `FOLIO_CONFIG_DIR` environment variable if set
/// 2. `~/.folio` if home directory is available
/// 3. `.folio` in current directory as fallback
pub fn config_dir() -> PathBuf {
    std::env::var(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_CONFIG_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
        })
}

/// Get the logs directory.
pub fn logs_dir() -> PathBuf {
    config_dir().join(LOGS_SUBDIR)
}

/// Get the viewer log file path.
pub fn log_file() -> PathBuf {
    logs_dir().join("folio.log")
}

/// Get the .env.local file path.
pub fn env_file() -> PathBuf {
    config_dir().join(".env.local")
}

/// Load `.env.local` from the config directory if present.
///
/// Returns `true` if a file was loaded. Variables already set in the
/// environment win.
pub fn load_env_file() -> bool {
    let path = env_file();
    path.exists() && dotenvy::from_path(&path).is_ok()
}

/// Errors from reading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be used.
    #[error("invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Runtime tunables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    pub scroll_threshold: u32,
    pub reveal_interval: Duration,
    pub frame_interval: Duration,
    /// Replacement profile, if configured.
    pub content_path: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            content_path: None,
        }
    }
}

impl FolioConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SCROLL_THRESHOLD_ENV) {
            config.scroll_threshold = parse_u32(SCROLL_THRESHOLD_ENV, &value)?;
        }
        if let Some(value) = lookup(REVEAL_INTERVAL_ENV) {
            config.reveal_interval = parse_millis(REVEAL_INTERVAL_ENV, &value)?;
        }
        if let Some(value) = lookup(FRAME_INTERVAL_ENV) {
            config.frame_interval = parse_millis(FRAME_INTERVAL_ENV, &value)?;
        }
        config.content_path = lookup(CONTENT_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Settings for the interaction controller.
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            scroll_threshold: self.scroll_threshold,
            reveal_interval: self.reveal_interval,
        }
    }
}

fn parse_u32(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason: "expected a non-negative integer",
    })
}

fn parse_millis(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match parse_u32(var, value)? {
        0 => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            reason: "interval must be at least 1 ms",
        }),
        ms => Ok(Duration::from_millis(u64::from(ms))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FolioConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.scroll_threshold, 50);
        assert_eq!(config.reveal_interval, Duration::from_millis(150));
    }

    #[test]
    fn test_overrides() {
        let config = FolioConfig::from_lookup(lookup(&[
            (SCROLL_THRESHOLD_ENV, "8"),
            (REVEAL_INTERVAL_ENV, " 20 "),
            (FRAME_INTERVAL_ENV, "16"),
            (CONTENT_ENV, "/tmp/content.json"),
        ]))
        .unwrap();

        assert_eq!(config.scroll_threshold, 8);
        assert_eq!(config.reveal_interval, Duration::from_millis(20));
        assert_eq!(config.frame_interval, Duration::from_millis(16));
        assert_eq!(config.content_path, Some(PathBuf::from("/tmp/content.json")));

        let settings = config.controller_settings();
        assert_eq!(settings.scroll_threshold, 8);
    }

    #[test]
    fn test_invalid_threshold() {
        let err = FolioConfig::from_lookup(lookup(&[(SCROLL_THRESHOLD_ENV, "-3")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == SCROLL_THRESHOLD_ENV
        ));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = FolioConfig::from_lookup(lookup(&[(REVEAL_INTERVAL_ENV, "0")])).unwrap_err();
        assert!(err.to_string().contains("at least 1 ms"));
    }

    #[test]
    fn test_blank_content_path_ignored() {
        let config = FolioConfig::from_lookup(lookup(&[(CONTENT_ENV, "  ")])).unwrap();
        assert_eq!(config.content_path, None);
    }
}
