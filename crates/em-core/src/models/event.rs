//! Event entity - the unit everything else hangs off.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published event. Tickets and feedback reference it by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Free-form category label (e.g., "music", "tech")
    pub category: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    /// Price per ticket in the store's currency unit
    pub price: f64,
    /// Maximum number of tickets; None = unlimited
    pub capacity: Option<u32>,
    pub organizer_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event with a fresh id
    pub fn new(
        title: String,
        category: String,
        location: String,
        starts_at: DateTime<Utc>,
        price: f64,
        organizer_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            category,
            location,
            starts_at,
            price,
            capacity: None,
            organizer_id,
            created_at: Utc::now(),
        }
    }

    /// Check whether the event lies in the past
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.starts_at <= now
    }
}
