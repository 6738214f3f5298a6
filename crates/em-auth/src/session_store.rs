//! Process-wide observable holder for the current session.

use crate::LocalStore;

use em_core::{PublicUser, Session};

use log::warn;
use tokio::sync::watch;

/// Durable key for the raw token string.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Durable key for the JSON-serialized identity (minus password).
pub const CURRENT_USER_KEY: &str = "current_user";

/// Single owner of the in-memory session. The durable store is a passive
/// mirror: this type writes it on every mutation but never observes outside
/// edits until the next construction.
pub struct SessionStore {
    store: LocalStore,
    tx: watch::Sender<Session>,
}

impl SessionStore {
    /// Construct the holder, rehydrating the session from the durable keys.
    ///
    /// The two keys are read independently; a missing or unparseable
    /// `current_user` record yields no identity without error, and no
    /// cross-check is made that token and identity match.
    pub fn new(store: LocalStore) -> Self {
        let session = Self::rehydrate(&store);
        let (tx, _rx) = watch::channel(session);
        Self { store, tx }
    }

    fn rehydrate(store: &LocalStore) -> Session {
        let token = store.get(AUTH_TOKEN_KEY);
        let user = store.get(CURRENT_USER_KEY).and_then(|raw| {
            match serde_json::from_str::<PublicUser>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Ignoring unparseable {} record: {}", CURRENT_USER_KEY, e);
                    None
                }
            }
        });

        Session { user, token }
    }

    /// The single write path: persist both keys, then publish one combined
    /// snapshot. Subscribers never observe an identity without its token.
    pub fn set_auth_data(&self, user: PublicUser, token: String) {
        self.store.set(AUTH_TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(json) => self.store.set(CURRENT_USER_KEY, &json),
            Err(e) => warn!("Failed to serialize {}: {}", CURRENT_USER_KEY, e),
        }

        self.tx.send_replace(Session::authenticated(user, token));
    }

    /// Remove both durable keys and publish the empty session.
    pub fn clear(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
        self.store.remove(CURRENT_USER_KEY);
        self.tx.send_replace(Session::empty());
    }

    /// Current token, read synchronously.
    pub fn token(&self) -> Option<String> {
        self.tx.borrow().token.clone()
    }

    /// Current identity, read synchronously.
    pub fn current_user(&self) -> Option<PublicUser> {
        self.tx.borrow().user.clone()
    }

    /// Derived authenticated flag.
    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    /// Snapshot of the whole session.
    pub fn session(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Observe every session change. The receiver starts at the current
    /// value.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}
