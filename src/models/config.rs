//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Lower bound on the spacing of network requests.
pub const MIN_REQUEST_INTERVAL_MS: u64 = 1000;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and page fetching settings
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Self::read(path)
            .map_err(|e| AppError::config(format!("failed to load {}: {e}", path.display())))
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let fetcher = &self.fetcher;
        if fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }

        let base = url::Url::parse(&fetcher.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "fetcher.base_url must be http(s), got '{}'",
                base.scheme()
            )));
        }

        if !fetcher.root_path.starts_with('/') {
            return Err(AppError::validation(
                "fetcher.root_path must start with '/'",
            ));
        }
        if fetcher.min_interval_ms < MIN_REQUEST_INTERVAL_MS {
            return Err(AppError::validation(format!(
                "fetcher.min_interval_ms must be >= {MIN_REQUEST_INTERVAL_MS}"
            )));
        }
        if fetcher.timeout_secs == Some(0) {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// Page fetching behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Documentation site every request path is appended to
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the method listing page
    #[serde(default = "defaults::root_path")]
    pub root_path: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Minimum spacing between network requests in milliseconds
    #[serde(default = "defaults::min_interval")]
    pub min_interval_ms: u64,

    /// Request timeout in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            root_path: defaults::root_path(),
            user_agent: defaults::user_agent(),
            min_interval_ms: defaults::min_interval(),
            timeout_secs: None,
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "https://api.stackexchange.com".into()
    }
    pub fn root_path() -> String {
        "/docs".into()
    }
    pub fn user_agent() -> String {
        concat!("apidoc-mapper/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn min_interval() -> u64 {
        super::MIN_REQUEST_INTERVAL_MS
    }
}
