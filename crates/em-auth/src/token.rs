//! Session token fabrication.
//!
//! The token is a reversible base64 encoding of the public identity plus an
//! issue timestamp. It is NOT a signature: nothing verifies it and nothing
//! expires it. Treat it as an opaque session id.

use crate::{AuthError, Result as AuthResult};

use em_core::PublicUser;

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What a token decodes back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub user: PublicUser,
    /// Unix timestamp of fabrication; informational only
    pub issued_at: i64,
}

/// Fabricate a token for an identity.
#[track_caller]
pub fn issue(user: &PublicUser) -> AuthResult<String> {
    let payload = TokenPayload {
        user: user.clone(),
        issued_at: Utc::now().timestamp(),
    };

    let json = serde_json::to_vec(&payload).map_err(|e| AuthError::InvalidToken {
        message: format!("cannot encode payload: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Recover the payload a token was fabricated from.
#[track_caller]
pub fn decode(token: &str) -> AuthResult<TokenPayload> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| AuthError::InvalidToken {
            message: format!("not base64: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| AuthError::InvalidToken {
        message: format!("unreadable payload: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
