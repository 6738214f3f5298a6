use crate::{
    auth_commands::AuthCommands, event_commands::EventCommands,
    feedback_commands::FeedbackCommands, ticket_commands::TicketCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Account operations (register, login, logout, status)
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Event operations
    Event {
        #[command(subcommand)]
        action: EventCommands,
    },

    /// Ticket operations
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },

    /// Feedback operations
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },
}
