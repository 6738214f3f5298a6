use clap::Subcommand;

#[derive(Subcommand)]
pub enum EventCommands {
    /// List all events
    List,
    /// Get an event by ID
    Get {
        /// Event ID (UUID)
        id: String,
    },
    /// Publish a new event
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        location: String,
        /// Start time, RFC 3339 (e.g., 2026-09-01T19:00:00Z)
        #[arg(long)]
        starts_at: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        capacity: Option<u32>,
    },
    /// Update an event
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        starts_at: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        capacity: Option<u32>,
    },
    /// Delete an event
    Delete {
        id: String,
    },
}
