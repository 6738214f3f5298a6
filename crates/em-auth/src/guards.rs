//! Access predicates evaluated before a navigation commits.

use crate::SessionStore;

/// Redirect destinations the predicates steer to. The application converts
/// its route configuration into this.
#[derive(Debug, Clone)]
pub struct RouteTargets {
    pub sign_in_path: String,
    pub landing_path: String,
}

impl RouteTargets {
    pub fn new(sign_in_path: impl Into<String>, landing_path: impl Into<String>) -> Self {
        Self {
            sign_in_path: sign_in_path.into(),
            landing_path: landing_path.into(),
        }
    }
}

/// Outcome of a gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation may proceed
    Allow,
    /// Navigation is blocked; the caller should go to `target` instead
    Redirect { target: String },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Gate for views that need an active session. Blocks and redirects to the
/// sign-in path, remembering the attempted path as `returnUrl`.
pub fn require_session(
    session: &SessionStore,
    attempted_path: &str,
    routes: &RouteTargets,
) -> GuardDecision {
    if session.is_authenticated() {
        return GuardDecision::Allow;
    }

    GuardDecision::Redirect {
        target: format!("{}?returnUrl={}", routes.sign_in_path, attempted_path),
    }
}

/// Gate for the sign-in views: only reachable without a session. A signed-in
/// user is sent to the landing path.
pub fn require_no_session(session: &SessionStore, routes: &RouteTargets) -> GuardDecision {
    if session.is_authenticated() {
        return GuardDecision::Redirect {
            target: routes.landing_path.clone(),
        };
    }

    GuardDecision::Allow
}
