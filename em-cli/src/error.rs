use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] em_config::ConfigError),

    #[error("{0}")]
    Auth(#[from] em_auth::AuthError),

    #[error("{0}")]
    Client(#[from] em_store::ClientError),

    #[error("{0}")]
    Core(#[from] em_core::CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {message}")]
    Argument { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    pub fn argument<S: Into<String>>(message: S) -> Self {
        CliError::Argument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
