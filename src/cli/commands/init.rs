use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Ledger;
use crate::storage;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty ledger with the canonical header, if none exists yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.ledger.clone(), cli.test)?;

    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let path = cfg.ledger_path();
    if path.exists() {
        info(format!("Ledger already present: {}", path.display()));
    } else {
        storage::persist_ledger(&Ledger::empty(), &path)?;
        success(format!("Ledger created: {}", path.display()));
    }

    Ok(())
}
