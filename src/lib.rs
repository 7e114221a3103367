//! rClubLedger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod report;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Sync { .. } => cli::commands::sync::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 0️⃣ .env nella directory corrente (o superiori); l'ambiente vince
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ override del ledger da riga di comando
    if let Some(custom) = &cli.ledger {
        cfg.ledger = custom.clone();
    }

    dispatch(&cli, &cfg)
}
