mod config;
mod error;
mod log_level;
mod logging_config;
mod routes_config;
mod session_config;
mod store_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use routes_config::RoutesConfig;
pub use session_config::SessionConfig;
pub use store_config::StoreConfig;

const DEFAULT_STORE_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;
const MIN_STORE_TIMEOUT_SECS: u64 = 1;
const MAX_STORE_TIMEOUT_SECS: u64 = 300;
const DEFAULT_SIGN_IN_PATH: &str = "/login";
const DEFAULT_LANDING_PATH: &str = "/events";
const DEFAULT_SESSION_DIR: &str = "session";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
