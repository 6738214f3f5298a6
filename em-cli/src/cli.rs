use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "em")]
#[command(about = "Event management client over a generic record store")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Record store URL (overrides configuration)
    #[arg(long, global = true)]
    pub(crate) store_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
