use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_STORE_BASE_URL, DEFAULT_STORE_TIMEOUT_SECS,
    MAX_STORE_TIMEOUT_SECS, MIN_STORE_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Connection settings for the external record store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_STORE_BASE_URL),
            timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::store(format!(
                "store.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_STORE_TIMEOUT_SECS || self.timeout_secs > MAX_STORE_TIMEOUT_SECS
        {
            return Err(ConfigError::store(format!(
                "store.timeout_secs must be {}-{}, got {}",
                MIN_STORE_TIMEOUT_SECS, MAX_STORE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
