use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS,
    MAX_API_TIMEOUT_SECS, MIN_API_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Check-in backend the dashboard talks to
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL for every backend call (e.g. "https://api.example.org")
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("must start with http:// or https://, got '{}'", self.base_url),
            ));
        }

        if !(MIN_API_TIMEOUT_SECS..=MAX_API_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                format!(
                    "must be {}-{}, got {}",
                    MIN_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS, self.timeout_secs
                ),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
