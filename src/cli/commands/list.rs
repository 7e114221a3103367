use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Activity;
use crate::storage::load_ledger;
use crate::ui::messages::{header, info};
use crate::utils::table::ledger_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit, athlete } = cmd {
        let path = cfg.ledger_path();
        let ledger = load_ledger(&path)?;

        let needle = athlete.as_ref().map(|a| a.to_lowercase());
        let rows: Vec<Activity> = ledger
            .iter()
            .filter(|a| match &needle {
                Some(n) => a.athlete_name.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        header(format!("Ledger {}", path.display()));

        if rows.is_empty() {
            info("No activities to show.");
            return Ok(());
        }

        print!("{}", ledger_table(&rows).render());
        println!("\n{} of {} activities", rows.len(), ledger.len());
    }
    Ok(())
}
