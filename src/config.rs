//! Tool configuration
//!
//! Settings come from `~/.config/aarly/config.toml`, overridable by the
//! `AARLY_API_URL` / `AARLY_API_TOKEN` environment variables (a local
//! `.env` file is honored) and finally by CLI flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.aarly.co/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Aarly REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bearer token for the admin endpoints, if the deployment requires one.
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
        }
    }
}

impl Config {
    /// Default config file location (`~/.config/aarly/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aarly").join("config.toml"))
    }

    /// Load configuration, applying environment overrides. A missing
    /// config file falls back to defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("Invalid config file: {}", path.display()))?
            }
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var("AARLY_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url;
            }
        }
        if let Ok(token) = std::env::var("AARLY_API_TOKEN") {
            if !token.trim().is_empty() {
                config.api_token = Some(token);
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_public_api() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.aarly.co/api");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_partial_config_file_fills_defaults() {
        let config: Config = toml::from_str("api_token = \"secret\"").unwrap();
        assert_eq!(config.api_url, "https://api.aarly.co/api");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
    }
}
