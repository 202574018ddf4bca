//! Configuration management for Sandbook

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::types::ContentMode;

pub const DEFAULT_API_BASE: &str = "https://en.wikipedia.org/w/api.php";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the MediaWiki action API. Point this at another
    /// language edition to read that wiki instead.
    pub base_url: String,
    pub timeout_secs: u64,
    pub content_mode: ContentMode,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    /// Horizontal drag distance, in terminal cells, required to
    /// register a swipe.
    pub swipe_threshold: f64,
    /// How many ticks a transient notification stays on screen.
    pub toast_ticks: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: 15,
            content_mode: ContentMode::Summary,
            user_agent: concat!("sandbook/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            swipe_threshold: 8.0,
            toast_ticks: 30,
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SANDBOOK_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingPath("config directory".to_string()))?;

    Ok(config_dir.join("sandbook").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.api.content_mode, ContentMode::Summary);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.swipe_threshold > 0.0);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://de.wikipedia.org/w/api.php"
content_mode = "full"

[ui]
swipe_threshold = 12.0
"#
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://de.wikipedia.org/w/api.php");
        assert_eq!(config.api.content_mode, ContentMode::Full);
        assert_eq!(config.ui.swipe_threshold, 12.0);
        // Unspecified fields keep their defaults
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = Config::load_from_path(Path::new("/nonexistent/sandbook.toml"));
        assert!(matches!(
            result,
            Err(crate::error::SandbookError::Config(ConfigError::Read(_)))
        ));
    }

    #[test]
    fn test_partial_config_parses() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
