use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tender")]
#[command(about = "Tender account and profile CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config.toml and TENDER_API_BASE_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Append the recorded diagnostics to the output
    #[arg(long, global = true)]
    pub diagnostics: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}
