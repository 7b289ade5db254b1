//! Configuration management for spense.
//!
//! Loads configuration from ${SPENSE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for spense configuration and data directories.
    //!
    //! SPENSE_HOME resolution order:
    //! 1. SPENSE_HOME environment variable (if set)
    //! 2. ~/.config/spense (default)

    use std::path::PathBuf;

    /// Returns the spense home directory.
    ///
    /// Checks SPENSE_HOME env var first, falls back to ~/.config/spense
    pub fn spense_home() -> PathBuf {
        if let Ok(home) = std::env::var("SPENSE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("spense"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        spense_home().join("config.toml")
    }

    /// Returns the path to the session.json file holding the session token.
    pub fn session_path() -> PathBuf {
        spense_home().join("session.json")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the expense API
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    const DEFAULT_BASE_URL: &str = "http://localhost:3000";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the base URL to use for API requests.
    ///
    /// The SPENSE_BASE_URL environment variable takes precedence over the
    /// config value; both are validated as URLs.
    pub fn effective_base_url(&self) -> Result<String> {
        resolve_base_url(std::env::var("SPENSE_BASE_URL").ok().as_deref(), &self.base_url)
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

/// Resolves the base URL with precedence: env > config.
///
/// Trailing slashes are stripped so paths can be appended verbatim.
fn resolve_base_url(env_value: Option<&str>, config_value: &str) -> Result<String> {
    let raw = match env_value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => config_value.trim(),
    };

    url::Url::parse(raw).with_context(|| format!("Invalid base URL: {raw}"))?;
    Ok(raw.trim_end_matches('/').to_string())
}
