use clap::Subcommand;

#[derive(Subcommand)]
pub enum FeedbackCommands {
    /// List feedback on an event
    List {
        /// Event ID (UUID)
        event_id: String,
    },
    /// Leave feedback on an event
    Add {
        /// Event ID (UUID)
        event_id: String,
        /// Star rating, 1-5
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        comment: Option<String>,
    },
}
