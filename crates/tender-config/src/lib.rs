mod api_config;
mod config;
mod diagnostics_config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod token_file;
mod upload_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use diagnostics_config::DiagnosticsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use token_file::TokenFile;
pub use upload_config::UploadConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "TENDER_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".tender";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_WATCHDOG_MS: u64 = 2000;
const MIN_WATCHDOG_MS: u64 = 100;
const MAX_WATCHDOG_MS: u64 = 60_000;

const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 50;
const MIN_DIAGNOSTICS_CAPACITY: usize = 1;
const MAX_DIAGNOSTICS_CAPACITY: usize = 10_000;

const DEFAULT_UPLOAD_MAX_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_UPLOAD_MAX_SIZE_BYTES: u64 = 100 * 1024 * 1024;
const DEFAULT_ABORT_RETRY_DELAY_MS: u64 = 1000;
const MAX_ABORT_RETRY_DELAY_MS: u64 = 30_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
