use crate::TicketStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booking of one or more seats for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub quantity: u32,
    pub status: TicketStatus,
    pub booked_at: DateTime<Utc>,
}

impl Ticket {
    pub fn new(event_id: Uuid, user_id: Uuid, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            quantity,
            status: TicketStatus::Booked,
            booked_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == TicketStatus::Booked
    }
}
