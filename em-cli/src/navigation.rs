//! Maps CLI commands onto app views and runs the access predicates.

use crate::auth_commands::AuthCommands;
use crate::commands::Commands;

use em_auth::{GuardDecision, RouteTargets, SessionStore, require_no_session, require_session};

pub(crate) const EVENTS_VIEW: &str = "/events";
pub(crate) const TICKETS_VIEW: &str = "/tickets";
pub(crate) const FEEDBACK_VIEW: &str = "/feedback";

/// Which gate applies before a command's view is entered.
enum AccessRule {
    RequiresSession(&'static str),
    RequiresNoSession,
    Open,
}

fn access_rule(command: &Commands) -> AccessRule {
    match command {
        Commands::Auth { action } => match action {
            // The sign-in views are only reachable without a session
            AuthCommands::Login { .. } | AuthCommands::Register { .. } => {
                AccessRule::RequiresNoSession
            }
            AuthCommands::Logout | AuthCommands::Status => AccessRule::Open,
        },
        Commands::Event { .. } => AccessRule::RequiresSession(EVENTS_VIEW),
        Commands::Ticket { .. } => AccessRule::RequiresSession(TICKETS_VIEW),
        Commands::Feedback { .. } => AccessRule::RequiresSession(FEEDBACK_VIEW),
    }
}

/// Evaluate the access predicate for a command before it runs.
pub(crate) fn check_access(
    command: &Commands,
    session: &SessionStore,
    routes: &RouteTargets,
) -> GuardDecision {
    match access_rule(command) {
        AccessRule::RequiresSession(view) => require_session(session, view, routes),
        AccessRule::RequiresNoSession => require_no_session(session, routes),
        AccessRule::Open => GuardDecision::Allow,
    }
}
