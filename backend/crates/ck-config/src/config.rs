use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ServerConfig, SessionConfig, UiConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for CK_CONFIG_DIR env var, else use ./.checkin/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply CK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CK_CONFIG_DIR env var > ./.checkin/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|source| ConfigError::WorkingDir { source })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.api.validate()?;
        self.session.validate()?;
        self.ui.validate()?;

        if let Some(ref file) = self.logging.file {
            let path = Path::new(file);
            if path.is_absolute() || file.contains("..") {
                return Err(ConfigError::invalid(
                    "logging.file",
                    "must be relative and cannot contain '..'",
                ));
            }
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs credentials).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!(
            "  session: cookies={}/{}, secure={}, max_age={}s, silent_renewal={}",
            self.session.access_cookie,
            self.session.renewal_cookie,
            self.session.secure_cookies,
            self.session.max_age_secs,
            self.session.silent_renewal
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  ui: page_size={}, visible_pages={}, toast={}ms",
            self.ui.page_size, self.ui.max_visible_pages, self.ui.toast_ms
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CK_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CK_SERVER_PORT", &mut self.server.port);

        // Backend API
        Self::apply_env_string("CK_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("CK_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_bool(
            "CK_SESSION_SECURE_COOKIES",
            &mut self.session.secure_cookies,
        );
        Self::apply_env_bool(
            "CK_SESSION_SILENT_RENEWAL",
            &mut self.session.silent_renewal,
        );
        Self::apply_env_parse("CK_SESSION_MAX_AGE_SECS", &mut self.session.max_age_secs);

        // Logging
        Self::apply_env_parse("CK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CK_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CK_LOG_FILE", &mut self.logging.file);

        // UI
        Self::apply_env_parse("CK_UI_PAGE_SIZE", &mut self.ui.page_size);
        Self::apply_env_parse("CK_UI_TOAST_MS", &mut self.ui.toast_ms);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
