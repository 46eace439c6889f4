//! Console configuration management.
//!
//! Configuration is stored as TOML:
//! - Linux: `~/.config/quakelog/console.toml`
//! - Windows: `%APPDATA%/quakelog/console.toml`
//!
//! Precedence, lowest first: file, `QUAKELOG_API_URL`, `--base-url`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "QUAKELOG_API_URL";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Base URL of the game-log API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Skip confirmation prompts for destructive actions.
    #[serde(default)]
    pub assume_yes: bool,
}

fn default_base_url() -> String {
    quakelog_protocol::constants::DEFAULT_BASE_URL.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            assume_yes: false,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or the default location.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Applies the environment and command-line overrides.
    pub fn with_overrides(
        mut self,
        env_base_url: Option<String>,
        flag_base_url: Option<String>,
        flag_yes: bool,
    ) -> Self {
        if let Some(url) = env_base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(url) = flag_base_url {
            self.base_url = url;
        }
        self.assume_yes |= flag_yes;
        self
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> anyhow::Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        Ok(PathBuf::from(home)
            .join(".config")
            .join("quakelog")
            .join("console.toml"))
    }

    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        Ok(PathBuf::from(appdata).join("quakelog").join("console.toml"))
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        Ok(PathBuf::from("/tmp/quakelog/console.toml"))
    }
}
