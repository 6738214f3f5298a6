use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role tag carried on every identity record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access, including event administration
    Admin,
    /// Can create and manage their own events
    Organizer,
    /// Can book tickets and leave feedback
    #[default]
    Attendee,
}

impl UserRole {
    /// Convert to record-store string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Organizer => "organizer",
            Self::Attendee => "attendee",
        }
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "admin" => Ok(Self::Admin),
            "organizer" => Ok(Self::Organizer),
            "attendee" => Ok(Self::Attendee),
            _ => Err(CoreError::InvalidUserRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
