use crate::client::ActivitySource;
use crate::core::{normalize, reconcile};
use crate::errors::AppResult;
use crate::models::Ledger;
use crate::report::Reporter;
use crate::storage;
use std::path::Path;

/// Outcome of one sync run.
#[derive(Debug)]
pub struct SyncSummary {
    /// Records that survived normalization.
    pub fetched: usize,
    pub ledger_before: usize,
    pub ledger_after: usize,
    pub ledger: Ledger,
}

impl SyncSummary {
    pub fn added(&self) -> usize {
        self.ledger_after.saturating_sub(self.ledger_before)
    }
}

pub struct SyncLogic;

impl SyncLogic {
    /// fetch → normalize → load → merge → persist, once.
    pub fn run(
        source: &dyn ActivitySource,
        club_id: u64,
        limit: usize,
        ledger_path: &Path,
        reporter: &dyn Reporter,
    ) -> AppResult<SyncSummary> {
        // 1️⃣ Download (mai fatale)
        let batch = normalize::fetch_batch(source, club_id, limit, reporter);
        let fetched = batch.len();

        // 2️⃣ Storico
        if ledger_path.exists() {
            reporter.info(&format!("Loading ledger {}", ledger_path.display()));
        } else {
            reporter.warn(&format!(
                "No ledger found at {}, starting a new one.",
                ledger_path.display()
            ));
        }
        let history = storage::load_ledger(ledger_path)?;
        let ledger_before = history.len();

        // 3️⃣ Merge
        let ledger = reconcile::merge(batch, history, reporter);

        // 4️⃣ Salvataggio
        storage::persist_ledger(&ledger, ledger_path)?;
        reporter.info(&format!("Ledger saved to {}", ledger_path.display()));

        Ok(SyncSummary {
            fetched,
            ledger_before,
            ledger_after: ledger.len(),
            ledger,
        })
    }
}
