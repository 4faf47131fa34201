//! Configuration management for the Community API adapter.
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. TOML file in the platform config directory
//!    (`~/.config/community-mcp/config.toml` on Linux/macOS,
//!    `%APPDATA%\community-mcp\config.toml` on Windows)
//! 3. Environment variables (`COMMUNITY_API_URL`, `COMMUNITY_API_TOKEN`,
//!    `COMMUNITY_API_TIMEOUT`)
//! 4. Command-line flags, applied by the binary
//!
//! The bearer token is never written to the config file.
//!
//! # Example
//!
//! ```ignore
//! use community_core::Config;
//!
//! let mut config = Config::load()?;
//! config.apply_env_from(|key| std::env::var(key).ok())?;
//! println!("{}", config.api.url);
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Error, Result};

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config directory name.
const CONFIG_DIR_NAME: &str = "community-mcp";

/// Default API base URL, including the versioned prefix.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "COMMUNITY_API_URL";

/// Environment variable supplying a pre-obtained bearer token.
pub const ENV_API_TOKEN: &str = "COMMUNITY_API_TOKEN";

/// Environment variable setting the request timeout in seconds.
pub const ENV_API_TIMEOUT: &str = "COMMUNITY_API_TIMEOUT";

// =============================================================================
// Configuration structures
// =============================================================================

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Pre-obtained bearer token (environment or CLI only)
    #[serde(skip)]
    pub token: Option<String>,
}

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the versioned prefix
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Request timeout in seconds (none by default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn validate_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "API URL must start with http:// or https://, got '{}'",
            url
        )))
    }
}

fn parse_timeout(value: &str) -> Result<u64> {
    let secs = value
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::Config(format!("Invalid timeout '{}': expected seconds", value)))?;
    validate_timeout(secs)?;
    Ok(secs)
}

/// Timeouts are whole seconds, at least one.
fn validate_timeout(secs: u64) -> Result<()> {
    if secs == 0 {
        return Err(Error::Config(
            "Timeout must be at least 1 second".to_string(),
        ));
    }
    Ok(())
}

// =============================================================================
// Config implementation
// =============================================================================

impl Config {
    /// Get the configuration directory path.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(CONFIG_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location.
    ///
    /// Returns a default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// Returns a default config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = ?path, "Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        debug!(path = ?path, "Loading config");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        validate_url(&config.api.url)?;
        if let Some(secs) = config.api.timeout_secs {
            validate_timeout(secs)?;
        }

        info!(path = ?path, "Config loaded successfully");
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        debug!(path = ?path, "Saving config");

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        info!(path = ?path, "Config saved successfully");
        Ok(())
    }

    /// Apply environment overrides through `lookup`, usually
    /// `|key| std::env::var(key).ok()`.
    ///
    /// Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = var(ENV_API_URL) {
            validate_url(&url)?;
            debug!(url = %url, "API URL overridden from environment");
            self.api.url = url;
        }

        if let Some(token) = var(ENV_API_TOKEN) {
            debug!("API token supplied from environment");
            self.token = Some(token);
        }

        if let Some(timeout) = var(ENV_API_TIMEOUT) {
            self.api.timeout_secs = Some(parse_timeout(&timeout)?);
        }

        Ok(())
    }

    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }

    /// Set a configuration value by key path.
    ///
    /// Key format: `section.field` (e.g., `api.url`, `api.timeout_secs`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.url" => {
                validate_url(value)?;
                self.api.url = value.to_string();
            }
            "api.timeout_secs" | "api.timeout" => {
                self.api.timeout_secs = Some(parse_timeout(value)?);
            }
            "api.token" => {
                return Err(Error::Config(format!(
                    "The token is not stored in the config file; set {} instead",
                    ENV_API_TOKEN
                )))
            }
            _ => return Err(Error::Config(format!("Unknown config key: {}", key))),
        }

        Ok(())
    }

    /// Get a configuration value by key path.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "api.url" => Ok(Some(self.api.url.clone())),
            "api.timeout_secs" | "api.timeout" => {
                Ok(self.api.timeout_secs.map(|t| t.to_string()))
            }
            _ => Err(Error::Config(format!("Unknown config key: {}", key))),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
