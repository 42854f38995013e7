use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "inventory")]
#[command(about = "Fagan glass and aluminum inventory accounts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
