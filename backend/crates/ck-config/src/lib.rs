mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;
mod ui_config;


pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use ui_config::UiConfig;

const CONFIG_DIR_ENV: &str = "CK_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".checkin";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 15;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_ACCESS_COOKIE: &str = "accessToken";
const DEFAULT_RENEWAL_COOKIE: &str = "refreshToken";
const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24;

const DEFAULT_PAGE_SIZE: usize = 10;
const MIN_PAGE_SIZE: usize = 1;
const MAX_PAGE_SIZE: usize = 100;
const DEFAULT_MAX_VISIBLE_PAGES: u32 = 4;
const MIN_VISIBLE_PAGES: u32 = 1;
const MAX_VISIBLE_PAGES: u32 = 10;
const DEFAULT_TOAST_MS: u64 = 1800;
const DEFAULT_LOGIN_REDIRECT_DELAY_MS: u64 = 900;
const DEFAULT_RESET_REDIRECT_DELAY_MS: u64 = 3000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
