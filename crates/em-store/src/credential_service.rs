//! Registration, login, and logout against the record store.
//!
//! Credential checks happen here, in the client process: the store is a dumb
//! collection server and never validates anything. Outcomes are returned as
//! tagged errors for the caller to render; nothing is retried.

use crate::{ClientError, RecordStoreClient};

use em_auth::{AuthError, Result as AuthResult, SessionStore, token};
use em_core::{NewUser, PublicUser, Session, User};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info};

pub struct CredentialService {
    client: RecordStoreClient,
    session: Arc<SessionStore>,
}

impl CredentialService {
    pub fn new(client: RecordStoreClient, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    /// Create a new identity record and open a session for it.
    ///
    /// Uniqueness is enforced only by the pre-check query; a concurrent
    /// registration can still slip a duplicate email into the store.
    pub async fn register(&self, new_user: NewUser) -> AuthResult<Session> {
        let existing = self
            .client
            .find_users_by_email(&new_user.email)
            .await
            .map_err(store_error)?;

        if !existing.is_empty() {
            return Err(AuthError::DuplicateIdentity {
                email: new_user.email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let user = new_user.into_user();
        let created = self.client.create_user(&user).await.map_err(store_error)?;

        info!("Registered new account for {}", created.email);
        self.commit(&created)
    }

    /// Check credentials against the stored record and open a session.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Session> {
        let users = self
            .client
            .find_users_by_email(email)
            .await
            .map_err(store_error)?;

        let Some(user) = users.into_iter().next() else {
            return Err(AuthError::NotFound {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        // The store holds passwords verbatim, so this is a plain comparison.
        if user.password != password {
            debug!("Password mismatch for {}", email);
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("Signed in {}", user.email);
        self.commit(&user)
    }

    /// Drop the session. Never touches the store, never fails.
    pub fn logout(&self) {
        self.session.clear();
        info!("Signed out");
    }

    /// Fabricate a token and commit identity + token through the session
    /// holder's single write path.
    fn commit(&self, user: &User) -> AuthResult<Session> {
        let public = PublicUser::from(user);
        let tok = token::issue(&public)?;
        self.session.set_auth_data(public, tok);
        Ok(self.session.session())
    }
}

fn store_error(err: ClientError) -> AuthError {
    AuthError::Store {
        message: err.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
