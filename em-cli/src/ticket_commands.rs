use clap::Subcommand;

#[derive(Subcommand)]
pub enum TicketCommands {
    /// List my tickets
    List,
    /// Book tickets for an event
    Book {
        /// Event ID (UUID)
        event_id: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Cancel a booking
    Cancel {
        /// Ticket ID (UUID)
        id: String,
    },
}
