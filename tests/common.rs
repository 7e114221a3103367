#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rclubledger::models::{Activity, Ledger};
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's config and credentials.
pub fn rcl(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rclubledger");
    cmd.current_dir(home)
        .env("RCLUBLEDGER_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("STRAVA_ACCESS_TOKEN")
        .env_remove("STRAVA_CLUB_ID")
        .env_remove("STRAVA_API_URL");
    cmd
}

/// Fresh directory inside the system temp dir (removed first if present)
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rclubledger_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Ledger path inside a fresh temp dir; the file itself does not exist yet
pub fn temp_ledger(name: &str) -> PathBuf {
    temp_dir(name).join("club_history.csv")
}

pub fn activity(id: i64, athlete: &str, km: f64, date: &str) -> Activity {
    Activity {
        identifier: Some(id),
        athlete_name: athlete.to_string(),
        distance_km: km,
        moving_time_min: 30.0,
        elevation_gain: 10.0,
        activity_type: "Run".to_string(),
        start_date: date.to_string(),
    }
}

pub fn ledger(records: Vec<Activity>) -> Ledger {
    Ledger::new(records)
}

/// Raw payload shaped like the club activities endpoint
pub fn payload(id: i64, first: &str, last: &str, meters: f64, date: &str) -> Value {
    json!({
        "id": id,
        "athlete": { "firstname": first, "lastname": last },
        "distance": meters,
        "moving_time": 1800,
        "total_elevation_gain": 25.5,
        "sport_type": "Run",
        "start_date_local": date,
    })
}

pub fn ids(ledger: &Ledger) -> Vec<i64> {
    ledger.iter().filter_map(|a| a.identifier).collect()
}
