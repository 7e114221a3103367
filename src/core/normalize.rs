//! Record normalizer: raw club activity payload → canonical `Activity`.

use crate::client::ActivitySource;
use crate::errors::AppResult;
use crate::models::{Activity, RawActivity};
use crate::report::Reporter;
use serde_json::Value;

/// Normalize a single payload. Fails on missing or mistyped fields.
pub fn normalize_activity(raw: &RawActivity) -> AppResult<Activity> {
    let identifier = raw.id()?;

    let full_name = format!("{} {}", raw.firstname()?, raw.lastname());
    let athlete_name = title_case(full_name.trim());

    let distance = non_negative("distance", raw.distance()?)?;
    let moving_time = non_negative("moving_time", raw.moving_time()?)?;
    let elevation = non_negative("total_elevation_gain", raw.total_elevation_gain()?)?;

    Ok(Activity {
        identifier: Some(identifier),
        athlete_name,
        distance_km: round2(distance / 1000.0),
        moving_time_min: round2(moving_time / 60.0),
        elevation_gain: elevation,
        activity_type: raw.sport_type()?,
        start_date: raw.start_date_local()?,
    })
}

/// Normalize a whole batch. Malformed payloads are reported and dropped.
pub fn normalize_batch(payloads: Vec<Value>, reporter: &dyn Reporter) -> Vec<Activity> {
    let mut out = Vec::with_capacity(payloads.len());

    for payload in payloads {
        // l'id serve solo per il messaggio di log
        let hint = payload
            .get("id")
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string());

        match RawActivity::from_value(payload).and_then(|raw| normalize_activity(&raw)) {
            Ok(activity) => out.push(activity),
            Err(e) => reporter.warn(&format!("Skipping activity {hint}: {e}")),
        }
    }

    out
}

/// Fetch and normalize in one step.
///
/// A failing source never aborts the run: the error is reported and the
/// batch is simply empty.
pub fn fetch_batch(
    source: &dyn ActivitySource,
    club_id: u64,
    limit: usize,
    reporter: &dyn Reporter,
) -> Vec<Activity> {
    reporter.info(&format!(
        "Downloading the last {limit} activities of club {club_id}..."
    ));

    match source.fetch_raw_activities(club_id, limit) {
        Ok(payloads) => {
            let total = payloads.len();
            let batch = normalize_batch(payloads, reporter);
            reporter.info(&format!(
                "Fetched {total} activities, {} normalized.",
                batch.len()
            ));
            batch
        }
        Err(e) => {
            reporter.error(&format!("Error contacting the activity source: {e}"));
            Vec::new()
        }
    }
}

/// Word-start title casing: a letter is upper-cased unless it follows
/// another letter, in which case it is lower-cased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }

    out
}

/// Round to 2 decimal places, ties to even (1.125 → 1.12, 0.375 → 0.38).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

fn non_negative(field: &str, v: f64) -> AppResult<f64> {
    if v < 0.0 {
        return Err(crate::errors::AppError::MalformedRecord(format!(
            "{field}: negative value {v}"
        )));
    }
    Ok(v)
}
