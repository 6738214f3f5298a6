use crate::{ConfigError, ConfigErrorResult, LoggingConfig, RoutesConfig, SessionConfig, StoreConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub routes: RoutesConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for EM_CONFIG_DIR env var, else use ./.em/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply EM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: EM_CONFIG_DIR env var > ./.em/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("EM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".em"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.store.validate()?;
        self.routes.validate()?;
        self.session.validate()?;

        Ok(())
    }

    /// Get absolute path to the session storage directory.
    pub fn session_dir(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.session.dir))
    }

    /// Log configuration summary (NEVER logs credentials).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  store: {} (timeout {}s)",
            self.store.base_url, self.store.timeout_secs
        );
        info!(
            "  routes: sign_in={}, landing={}",
            self.routes.sign_in_path, self.routes.landing_path
        );
        info!("  session: dir={}", self.session.dir);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Store
        Self::apply_env_string("EM_STORE_BASE_URL", &mut self.store.base_url);
        Self::apply_env_parse("EM_STORE_TIMEOUT_SECS", &mut self.store.timeout_secs);

        // Routes
        Self::apply_env_string("EM_ROUTES_SIGN_IN_PATH", &mut self.routes.sign_in_path);
        Self::apply_env_string("EM_ROUTES_LANDING_PATH", &mut self.routes.landing_path);

        // Session
        Self::apply_env_string("EM_SESSION_DIR", &mut self.session.dir);

        // Logging
        Self::apply_env_parse("EM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("EM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("EM_LOG_FILE", &mut self.logging.file);
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
