use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

const CONFIG_FILE: &str = "newsdesk.toml";

fn default_base_url() -> String {
    "http://localhost:7080".to_string()
}

fn default_timeout_ms() -> u64 {
    4000
}

fn default_user_agent() -> String {
    concat!("newsdesk/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Client configuration for the upstream content-data service.
///
/// Resolution order: defaults, then an optional `newsdesk.toml` in the
/// working directory, then `NEWSDESK_*` environment overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Origin of the content-data service requests are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::read_file(Path::new(CONFIG_FILE))?
        } else {
            Self::default()
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file: {}", path.display()))
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("NEWSDESK_BASE_URL") {
            if !v.trim().is_empty() {
                self.base_url = v;
            }
        }
        self.timeout_ms = std::env::var("NEWSDESK_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.timeout_ms);
        if let Ok(v) = std::env::var("NEWSDESK_USER_AGENT") {
            if !v.trim().is_empty() {
                self.user_agent = v;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)
            .with_context(|| format!("invalid base URL: {}", self.base_url))?;
        Ok(())
    }
}
