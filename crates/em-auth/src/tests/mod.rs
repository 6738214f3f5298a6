
use em_core::{PublicUser, UserRole};

use uuid::Uuid;

pub(crate) fn sample_user() -> PublicUser {
    PublicUser {
        id: Uuid::new_v4(),
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role: UserRole::Attendee,
    }
}
