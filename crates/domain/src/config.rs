//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCESS_TOKEN_KEY, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_API_VERSION,
    DEFAULT_LOG_LEVEL, REFRESH_TOKEN_KEY,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Coordinates of the REST backend used by the surrounding application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub version: String,
    /// Browser storage key of the bearer token
    pub access_token_key: String,
    /// Browser storage key of the refresh token
    pub refresh_token_key: String,
    pub timeout_seconds: u64,
}

impl ApiConfig {
    /// Build `{base_url}/{version}/{path}` without doubled slashes.
    ///
    /// ```rust
    /// use proptyos_domain::ApiConfig;
    ///
    /// let api = ApiConfig::default();
    /// assert_eq!(api.versioned_url("/projects"), "https://api.proptyos.com/v1/projects");
    /// ```
    #[must_use]
    pub fn versioned_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let version = self.version.trim_matches('/');
        let path = path.trim_start_matches('/');

        match (version.is_empty(), path.is_empty()) {
            (true, true) => base.to_string(),
            (true, false) => format!("{base}/{path}"),
            (false, true) => format!("{base}/{version}"),
            (false, false) => format!("{base}/{version}/{path}"),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            access_token_key: ACCESS_TOKEN_KEY.to_string(),
            refresh_token_key: REFRESH_TOKEN_KEY.to_string(),
            timeout_seconds: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

/// Sales-allocation store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Start the session with the mock pipeline (two offers, two
    /// allocations, three approvals)
    pub seed_mock_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_mock_data: true }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
