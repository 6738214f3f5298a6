use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("An account with email {email} already exists {location}")]
    DuplicateIdentity {
        email: String,
        location: ErrorLocation,
    },

    #[error("No account found for email {email} {location}")]
    NotFound {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Session storage unavailable: {message} {location}")]
    StorageUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Record store failure: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable code for client-facing output
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateIdentity { .. } => "DUPLICATE_IDENTITY",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::StorageUnavailable { .. } => "STORAGE_UNAVAILABLE",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::Store { .. } => "STORE_FAILURE",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
