use crate::config::credentials::{CLUB_ENV, TOKEN_ENV};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rClubLedger
/// CLI application to keep a deduplicated ledger of Strava club activities
#[derive(Parser)]
#[command(
    name = "rclubledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pull Strava club activities and keep a deduplicated CSV ledger",
    long_about = None
)]
pub struct Cli {
    /// Override ledger path (useful for tests or a custom location)
    #[arg(global = true, long = "ledger")]
    pub ledger: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty ledger
    Init,

    /// Fetch the latest club activities and merge them into the ledger
    Sync {
        /// Strava access token
        #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
        token: Option<String>,

        /// Strava club id
        #[arg(long, env = CLUB_ENV)]
        club: Option<String>,

        /// Maximum number of activities to download (default from config)
        #[arg(long)]
        limit: Option<usize>,

        /// Override API base URL
        #[arg(long = "api-url", env = "STRAVA_API_URL", hide = true)]
        api_url: Option<String>,
    },

    /// Print the ledger
    List {
        /// Show only the first N records
        #[arg(long, short)]
        limit: Option<usize>,

        /// Filter by athlete name (case-insensitive, partial match)
        #[arg(long)]
        athlete: Option<String>,
    },

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
