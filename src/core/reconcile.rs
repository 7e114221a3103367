//! Ledger reconciler: merges a freshly fetched batch into the ledger.
//!
//! Steps, in order:
//! 1. empty batch → ledger returned untouched
//! 2. formatter artifacts stripped from `activity_type` (incoming only)
//! 3. activities shorter than `MIN_DISTANCE_KM` dropped
//! 4. incoming records placed before the existing ones
//! 5. duplicates removed, first occurrence wins
//! 6. stable sort: `start_date` descending, `athlete_name` ascending

use crate::models::activity::RecordKey;
use crate::models::{Activity, Ledger};
use crate::report::Reporter;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use std::collections::HashSet;

pub const MIN_DISTANCE_KM: f64 = 1.0;

/// Literal substrings a misbehaving upstream formatter may leave in the
/// sport type (e.g. `root='Run'`).
const TYPE_ARTIFACTS: [&str; 3] = ["root=", "'", "\""];

pub fn merge(incoming: Vec<Activity>, existing: Ledger, reporter: &dyn Reporter) -> Ledger {
    // 1️⃣ niente di nuovo
    if incoming.is_empty() {
        return existing;
    }

    // 2️⃣ + 3️⃣ pulizia e filtro
    let received = incoming.len();
    let fresh: Vec<Activity> = incoming
        .into_iter()
        .map(|mut a| {
            a.activity_type = clean_activity_type(&a.activity_type);
            a
        })
        .filter(|a| a.distance_km >= MIN_DISTANCE_KM)
        .collect();

    let short = received - fresh.len();
    if short > 0 {
        reporter.info(&format!(
            "Dropped {short} activities shorter than {MIN_DISTANCE_KM} km."
        ));
    }

    if !existing.is_keyed() {
        reporter.warn(
            "Existing ledger has no identifier column: deduplicating by whole record.",
        );
    }

    // 4️⃣ concatenazione: i nuovi prima
    let combined: Vec<Activity> = fresh.into_iter().chain(existing.into_records()).collect();

    // 5️⃣ deduplica, vince il primo
    let before = combined.len();
    let mut records = dedup_keep_first(combined);
    reporter.info(&format!("Duplicates removed: {}", before - records.len()));

    // 6️⃣ ordinamento
    records.sort_by(compare_ledger_order);

    Ledger::new(records)
}

/// Remove formatter artifacts from an activity type.
pub fn clean_activity_type(raw: &str) -> String {
    TYPE_ARTIFACTS
        .iter()
        .fold(raw.to_string(), |acc, artifact| acc.replace(artifact, ""))
}

/// Keyed dedup preserving first-seen order. Records without an identifier
/// fall back to whole-record equality.
pub fn dedup_keep_first(records: Vec<Activity>) -> Vec<Activity> {
    let mut seen: HashSet<RecordKey> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|a| seen.insert(a.record_key()))
        .collect()
}

/// Ledger order: most recent first, then athlete name A→Z.
///
/// Dates are compared on their parsed wall-clock time, so the same instant
/// written in two formats counts as one date. Unparseable dates go after
/// every parseable one and compare by raw text.
pub fn compare_ledger_order(a: &Activity, b: &Activity) -> Ordering {
    let by_date = match (parse_start_date(&a.start_date), parse_start_date(&b.start_date)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.start_date.cmp(&a.start_date),
    };

    by_date.then_with(|| a.athlete_name.cmp(&b.athlete_name))
}

pub fn parse_start_date(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
