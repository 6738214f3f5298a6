use crate::{ConfigError, ConfigErrorResult, DEFAULT_LANDING_PATH, DEFAULT_SIGN_IN_PATH};

use serde::Deserialize;

/// Redirect targets used by the access predicates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Where an unauthenticated user is sent (carries a returnUrl parameter)
    pub sign_in_path: String,
    /// Where an already-signed-in user is sent away from the sign-in views
    pub landing_path: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            sign_in_path: String::from(DEFAULT_SIGN_IN_PATH),
            landing_path: String::from(DEFAULT_LANDING_PATH),
        }
    }
}

impl RoutesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, path) in [
            ("routes.sign_in_path", &self.sign_in_path),
            ("routes.landing_path", &self.landing_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::routes(format!(
                    "{} must start with '/', got {}",
                    name, path
                )));
            }
        }

        Ok(())
    }
}
