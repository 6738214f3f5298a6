use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_DIR};

use serde::Deserialize;

/// Durable session storage location, relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SESSION_DIR),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Keep session data under the config dir
        let path = std::path::Path::new(&self.dir);
        if path.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::session(
                "session.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
