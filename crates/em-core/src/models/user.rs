//! Identity records as held by the external record store.

use crate::UserRole;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A full identity record, exactly as the record store returns it.
///
/// The store keeps the password verbatim; anything that leaves this process
/// (session storage, tokens) must go through [`PublicUser`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub password: String,
}

/// Identity minus the password. This is what the session holds and what the
/// `current_user` storage key serializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl PublicUser {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
        }
    }
}

/// Registration payload for a new identity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: UserRole,
    pub password: String,
}

impl NewUser {
    /// Materialize a store record with a fresh id.
    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            password: self.password,
        }
    }
}
