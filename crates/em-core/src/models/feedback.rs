use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Attendee feedback left on an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    /// Star rating, 1-5
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Create feedback after validating the rating range.
    #[track_caller]
    pub fn new(
        event_id: Uuid,
        user_id: Uuid,
        rating: u8,
        comment: Option<String>,
    ) -> CoreErrorResult<Self> {
        validate_rating(rating)?;

        Ok(Self {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            rating,
            comment,
            created_at: Utc::now(),
        })
    }
}

/// Ratings outside 1-5 are rejected before they reach the store.
#[track_caller]
pub fn validate_rating(rating: u8) -> CoreErrorResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation {
            message: format!(
                "rating must be {}-{}, got {}",
                MIN_RATING, MAX_RATING, rating
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
