mod common;
use common::{activity, ids, ledger};
use rclubledger::core::reconcile::{clean_activity_type, compare_ledger_order, merge};
use rclubledger::models::{Activity, Ledger};
use rclubledger::report::{Level, MemoryReporter};
use std::cmp::Ordering;
use std::collections::HashSet;

fn merge_quiet(incoming: Vec<Activity>, existing: Ledger) -> Ledger {
    merge(incoming, existing, &MemoryReporter::new())
}

fn sample_history() -> Ledger {
    ledger(vec![
        activity(10, "Carla", 12.0, "2024-01-05"),
        activity(11, "Bruno", 3.2, "2024-01-04"),
        activity(12, "Ana", 7.5, "2024-01-04"),
    ])
}

fn sample_batch() -> Vec<Activity> {
    vec![
        activity(20, "Dario", 6.0, "2024-01-06"),
        activity(11, "Bruno Díaz", 3.2, "2024-01-04"),
        activity(21, "Elena", 0.4, "2024-01-06"),
        activity(22, "Ana", 1.0, "2024-01-05"),
    ]
}

#[test]
fn test_short_activity_dropped_on_empty_ledger() {
    let out = merge_quiet(
        vec![
            activity(1, "Ana", 5.0, "2024-01-02"),
            activity(2, "Bob", 0.5, "2024-01-03"),
        ],
        Ledger::empty(),
    );

    assert_eq!(ids(&out), vec![1]);
}

#[test]
fn test_incoming_record_overrides_stale_one() {
    let out = merge_quiet(
        vec![activity(5, "New Name", 5.0, "2024-01-01")],
        ledger(vec![activity(5, "Old Name", 5.0, "2024-01-01")]),
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out.records()[0].identifier, Some(5));
    assert_eq!(out.records()[0].athlete_name, "New Name");
}

#[test]
fn test_empty_batch_returns_ledger_untouched() {
    // deliberately not in ledger order: it must not even be re-sorted
    let history = ledger(vec![
        activity(1, "Zoe", 5.0, "2023-01-01"),
        activity(2, "Ana", 5.0, "2024-01-01"),
    ]);

    let reporter = MemoryReporter::new();
    let out = merge(Vec::new(), history.clone(), &reporter);

    assert_eq!(out, history);
    assert!(reporter.entries().is_empty());
}

#[test]
fn test_merge_is_idempotent() {
    let once = merge_quiet(sample_batch(), sample_history());
    let twice = merge_quiet(sample_batch(), once.clone());

    assert_eq!(once, twice);
}

#[test]
fn test_merge_output_invariants() {
    let out = merge_quiet(sample_batch(), sample_history());

    // unique identifiers
    let unique: HashSet<i64> = ids(&out).into_iter().collect();
    assert_eq!(unique.len(), out.len());

    // distance floor, but exactly 1 km stays
    assert!(out.iter().all(|a| a.distance_km >= 1.0));
    assert!(ids(&out).contains(&22));
    assert!(!ids(&out).contains(&21));

    // date desc, athlete asc
    for pair in out.records().windows(2) {
        assert_ne!(compare_ledger_order(&pair[0], &pair[1]), Ordering::Greater);
    }
    assert_eq!(ids(&out), vec![20, 22, 10, 12, 11]);
    assert_eq!(out.records()[4].athlete_name, "Bruno Díaz");
}

#[test]
fn test_short_activity_never_reaches_ledger() {
    let first = merge_quiet(vec![activity(1, "Ana", 0.99, "2024-01-01")], Ledger::empty());
    assert!(first.is_empty());

    let second = merge_quiet(vec![activity(2, "Ana", 4.0, "2024-01-02")], first);
    assert_eq!(ids(&second), vec![2]);
}

#[test]
fn test_duplicate_inside_batch_keeps_first() {
    let out = merge_quiet(
        vec![
            activity(3, "First", 5.0, "2024-01-01"),
            activity(3, "Second", 5.0, "2024-01-01"),
        ],
        Ledger::empty(),
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out.records()[0].athlete_name, "First");
}

#[test]
fn test_artifacts_stripped_from_incoming_only() {
    let mut fresh = activity(1, "Ana", 5.0, "2024-01-02");
    fresh.activity_type = "root='Ride'".to_string();
    let mut old = activity(2, "Ana", 5.0, "2024-01-01");
    old.activity_type = "root='Walk'".to_string();

    let out = merge_quiet(vec![fresh], ledger(vec![old]));

    assert_eq!(out.records()[0].activity_type, "Ride");
    assert_eq!(out.records()[1].activity_type, "root='Walk'");
}

#[test]
fn test_clean_activity_type() {
    assert_eq!(clean_activity_type("root='Run'"), "Run");
    assert_eq!(clean_activity_type("\"TrailRun\""), "TrailRun");
    assert_eq!(clean_activity_type("Swim"), "Swim");
}

#[test]
fn test_legacy_ledger_falls_back_to_whole_record_dedup() {
    let mut legacy_row = activity(0, "Ana", 5.0, "2023-12-01");
    legacy_row.identifier = None;
    let mut other_row = legacy_row.clone();
    other_row.distance_km = 6.0;

    let history = Ledger::legacy(vec![legacy_row.clone(), legacy_row.clone(), other_row]);

    let reporter = MemoryReporter::new();
    let out = merge(
        vec![activity(1, "Ana", 5.0, "2023-12-01")],
        history,
        &reporter,
    );

    // the incoming keyed record plus two distinct legacy rows
    assert_eq!(out.len(), 3);
    assert_eq!(out.iter().filter(|a| a.identifier.is_none()).count(), 2);
    assert!(out.is_keyed());
    assert_eq!(reporter.count(Level::Warn), 1);
    assert!(reporter.contains("Duplicates removed: 1"));
}

#[test]
fn test_sort_mixed_date_formats() {
    let out = merge_quiet(
        vec![
            activity(1, "Ana", 5.0, "2024-01-02T08:00:00Z"),
            activity(2, "Ana", 5.0, "not a date"),
            activity(3, "Ana", 5.0, "2024-01-02 09:00:00+01:00"),
            activity(4, "Ana", 5.0, "2024-01-03"),
        ],
        Ledger::empty(),
    );

    assert_eq!(ids(&out), vec![4, 3, 1, 2]);
}

#[test]
fn test_same_date_sorted_by_athlete() {
    let out = merge_quiet(
        vec![
            activity(1, "Zoe", 5.0, "2024-01-02"),
            activity(2, "Ana", 5.0, "2024-01-02"),
            activity(3, "Marta", 5.0, "2024-01-02"),
        ],
        Ledger::empty(),
    );

    let names: Vec<&str> = out.iter().map(|a| a.athlete_name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Marta", "Zoe"]);
}

#[test]
fn test_same_instant_in_different_formats_sorted_by_athlete() {
    // fresh fetch vs. row written by the earlier tool
    let out = merge_quiet(
        vec![
            activity(1, "Zoe", 5.0, "2024-01-02T08:00:00Z"),
            activity(2, "Ana", 5.0, "2024-01-02 08:00:00+00:00"),
        ],
        Ledger::empty(),
    );

    assert_eq!(ids(&out), vec![2, 1]);
}

#[test]
fn test_unparseable_dates_sorted_by_text_then_athlete() {
    let out = merge_quiet(
        vec![
            activity(1, "Zoe", 5.0, "someday"),
            activity(2, "Ana", 5.0, "someday"),
            activity(3, "Ana", 5.0, "yesterday"),
            activity(4, "Ana", 5.0, "2020-01-01"),
        ],
        Ledger::empty(),
    );

    assert_eq!(ids(&out), vec![4, 3, 2, 1]);
}
