pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::event::Event;
pub use models::feedback::Feedback;
pub use models::session::Session;
pub use models::ticket::Ticket;
pub use models::ticket_status::TicketStatus;
pub use models::user::{NewUser, PublicUser, User};
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
