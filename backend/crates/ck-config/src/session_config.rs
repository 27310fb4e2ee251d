use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_COOKIE, DEFAULT_RENEWAL_COOKIE,
    DEFAULT_SESSION_MAX_AGE_SECS,
};

use serde::Deserialize;

/// Session cookie settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cookie carrying the bearer credential
    pub access_cookie: String,
    /// Cookie carrying the renewal credential
    pub renewal_cookie: String,
    /// Mark cookies `Secure` (HTTPS deployments)
    pub secure_cookies: bool,
    /// Access cookie lifetime
    pub max_age_secs: i64,
    /// Trade a renewal cookie for a new access credential at the gate
    pub silent_renewal: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            access_cookie: String::from(DEFAULT_ACCESS_COOKIE),
            renewal_cookie: String::from(DEFAULT_RENEWAL_COOKIE),
            secure_cookies: false,
            max_age_secs: DEFAULT_SESSION_MAX_AGE_SECS,
            silent_renewal: false,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.access_cookie.trim().is_empty() || self.renewal_cookie.trim().is_empty() {
            return Err(ConfigError::invalid(
                "session.access_cookie",
                "cookie names must not be empty",
            ));
        }

        if self.access_cookie == self.renewal_cookie {
            return Err(ConfigError::invalid(
                "session.renewal_cookie",
                "must differ from session.access_cookie",
            ));
        }

        if self.max_age_secs <= 0 {
            return Err(ConfigError::invalid(
                "session.max_age_secs",
                format!("must be positive, got {}", self.max_age_secs),
            ));
        }

        Ok(())
    }
}
