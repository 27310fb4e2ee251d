use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_REDIRECT_DELAY_MS, DEFAULT_MAX_VISIBLE_PAGES,
    DEFAULT_PAGE_SIZE, DEFAULT_RESET_REDIRECT_DELAY_MS, DEFAULT_TOAST_MS, MAX_PAGE_SIZE,
    MAX_VISIBLE_PAGES, MIN_PAGE_SIZE, MIN_VISIBLE_PAGES,
};

use serde::Deserialize;

/// Roster screen presentation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub page_size: usize,
    pub max_visible_pages: u32,
    /// How long the success notification stays up
    pub toast_ms: u64,
    pub login_redirect_delay_ms: u64,
    pub reset_redirect_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            toast_ms: DEFAULT_TOAST_MS,
            login_redirect_delay_ms: DEFAULT_LOGIN_REDIRECT_DELAY_MS,
            reset_redirect_delay_ms: DEFAULT_RESET_REDIRECT_DELAY_MS,
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::invalid(
                "ui.page_size",
                format!(
                    "must be {}-{}, got {}",
                    MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.page_size
                ),
            ));
        }

        if !(MIN_VISIBLE_PAGES..=MAX_VISIBLE_PAGES).contains(&self.max_visible_pages) {
            return Err(ConfigError::invalid(
                "ui.max_visible_pages",
                format!(
                    "must be {}-{}, got {}",
                    MIN_VISIBLE_PAGES, MAX_VISIBLE_PAGES, self.max_visible_pages
                ),
            ));
        }

        Ok(())
    }
}
