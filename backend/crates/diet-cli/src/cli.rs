use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "diet")]
#[command(about = "Daily diet tracker CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to the configured bind address)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Session token to use instead of the stored one
    #[arg(long, global = true)]
    pub session: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
