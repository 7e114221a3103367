use crate::cli::parser::Commands;
use crate::client;
use crate::config::{Config, Credentials};
use crate::core::SyncLogic;
use crate::errors::AppResult;
use crate::report::TracingReporter;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::ledger_table;

/// Handle the `sync` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync {
        token,
        club,
        limit,
        api_url,
    } = cmd
    {
        // credenziali prima di tutto: senza non si parte
        let creds = Credentials::resolve(token.as_deref(), club.as_deref())?;

        let base_url = api_url.as_deref().unwrap_or(&cfg.api_base_url);
        let source = client::connect(base_url, &creds.access_token);

        let summary = SyncLogic::run(
            source.as_ref(),
            creds.club_id,
            limit.unwrap_or(cfg.fetch_limit),
            &cfg.ledger_path(),
            &TracingReporter,
        )?;

        if summary.fetched == 0 {
            warning("No activities fetched, the ledger keeps its previous content.");
        }

        success(format!(
            "Ledger updated: {} fetched, {} → {} records (+{})",
            summary.fetched,
            summary.ledger_before,
            summary.ledger_after,
            summary.added()
        ));

        if summary.ledger.is_empty() {
            info("The ledger is empty.");
        } else {
            println!();
            let head = &summary.ledger.records()[..cfg.preview_rows.min(summary.ledger.len())];
            print!("{}", ledger_table(head).render());
        }
    }

    Ok(())
}
