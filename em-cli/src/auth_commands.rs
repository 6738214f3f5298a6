use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create a new account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Account role: admin, organizer or attendee
        #[arg(long, default_value = "attendee")]
        role: String,
    },
    /// Sign in with existing credentials
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and drop the stored session
    Logout,
    /// Show the current session
    Status,
}
