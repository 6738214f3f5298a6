use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user role: {value} {location}")]
    InvalidUserRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid ticket status: {value} {location}")]
    InvalidTicketStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
