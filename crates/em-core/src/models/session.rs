use crate::PublicUser;

use serde::{Deserialize, Serialize};

/// In-memory representation of the currently signed-in identity plus its
/// token. Both fields are set together on login/registration and cleared
/// together on logout; rehydration from storage reads them independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    pub user: Option<PublicUser>,
    pub token: Option<String>,
}

impl Session {
    /// A session with no identity and no token.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn authenticated(user: PublicUser, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    /// Derived flag: a session counts as authenticated when an identity is
    /// present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
