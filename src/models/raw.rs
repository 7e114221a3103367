//! Raw activity payload as returned by the club activities endpoint.
//!
//! Every field is optional here: presence and type are checked by the
//! normalizer, one record at a time, so a single bad payload can be
//! dropped without losing the rest of the batch.

use crate::errors::{AppError, AppResult};
use crate::models::activity::integral_id;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAthlete {
    #[serde(default)]
    pub firstname: Option<String>,
    /// Defaults to "" when missing.
    #[serde(default)]
    pub lastname: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawActivity {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub athlete: Option<RawAthlete>,
    /// Meters.
    #[serde(default)]
    pub distance: Option<Value>,
    /// Seconds.
    #[serde(default)]
    pub moving_time: Option<Value>,
    #[serde(default)]
    pub total_elevation_gain: Option<Value>,
    #[serde(default)]
    pub sport_type: Option<Value>,
    #[serde(default)]
    pub start_date_local: Option<Value>,
}

impl RawActivity {
    pub fn from_value(value: Value) -> AppResult<Self> {
        serde_json::from_value(value).map_err(|e| AppError::MalformedRecord(e.to_string()))
    }

    /// Id as integer, accepting numeric strings and integral floats.
    pub fn id(&self) -> AppResult<i64> {
        match &self.id {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral_id))
                .ok_or_else(|| malformed("id", "not an integer")),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| malformed("id", "not an integer")),
            Some(Value::Null) | None => Err(malformed("id", "missing")),
            Some(_) => Err(malformed("id", "not an integer")),
        }
    }

    pub fn firstname(&self) -> AppResult<&str> {
        self.athlete
            .as_ref()
            .and_then(|a| a.firstname.as_deref())
            .ok_or_else(|| malformed("athlete.firstname", "missing"))
    }

    pub fn lastname(&self) -> &str {
        self.athlete
            .as_ref()
            .and_then(|a| a.lastname.as_deref())
            .unwrap_or("")
    }

    pub fn distance(&self) -> AppResult<f64> {
        number("distance", &self.distance)
    }

    pub fn moving_time(&self) -> AppResult<f64> {
        number("moving_time", &self.moving_time)
    }

    pub fn total_elevation_gain(&self) -> AppResult<f64> {
        number("total_elevation_gain", &self.total_elevation_gain)
    }

    /// Sport type as text; non-string values keep their JSON text.
    pub fn sport_type(&self) -> AppResult<String> {
        match &self.sport_type {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Null) | None => Err(malformed("sport_type", "missing")),
            Some(other) => Ok(other.to_string()),
        }
    }

    pub fn start_date_local(&self) -> AppResult<String> {
        match &self.start_date_local {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Null) | None => Err(malformed("start_date_local", "missing")),
            Some(_) => Err(malformed("start_date_local", "not a string")),
        }
    }
}

fn number(field: &str, value: &Option<Value>) -> AppResult<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Null) | None => return Err(malformed(field, "missing")),
        Some(_) => None,
    };

    match parsed {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(malformed(field, "not a number")),
    }
}

fn malformed(field: &str, reason: &str) -> AppError {
    AppError::MalformedRecord(format!("{field}: {reason}"))
}
