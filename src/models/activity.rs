use serde::Serialize;

/// Column names of the ledger file, in file order.
pub const COLUMNS: [&str; 7] = [
    "identifier",
    "athlete_name",
    "distance_km",
    "moving_time_min",
    "elevation_gain",
    "activity_type",
    "start_date",
];

/// Header written by the first version of the tool (Spanish names).
/// Accepted on load, never written.
pub const LEGACY_COLUMNS: [&str; 7] = [
    "id_actividad",
    "atleta",
    "distancia_km",
    "tiempo_movimiento_min",
    "elevacion",
    "actividad",
    "fecha",
];

/// Canonical activity record, one row of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    /// Strava activity id. `None` only for rows of a ledger written
    /// before the id column existed.
    pub identifier: Option<i64>,
    pub athlete_name: String,
    pub distance_km: f64,
    pub moving_time_min: f64,
    pub elevation_gain: f64,
    pub activity_type: String,
    pub start_date: String,
}

/// Whole-number float as an id. `None` for fractions, NaN/inf and values
/// outside the i64 range (a plain `as` cast would saturate).
pub fn integral_id(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict bound
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.is_finite() && f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

/// Deduplication key of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Id(i64),
    // whole-record equality, floats compared bitwise
    Row(String, u64, u64, u64, String, String),
}

impl Activity {
    pub fn record_key(&self) -> RecordKey {
        match self.identifier {
            Some(id) => RecordKey::Id(id),
            None => RecordKey::Row(
                self.athlete_name.clone(),
                self.distance_km.to_bits(),
                self.moving_time_min.to_bits(),
                self.elevation_gain.to_bits(),
                self.activity_type.clone(),
                self.start_date.clone(),
            ),
        }
    }

    /// Row as displayed by `list` / the sync preview.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.identifier.map(|id| id.to_string()).unwrap_or_default(),
            self.athlete_name.clone(),
            format!("{:.2}", self.distance_km),
            format!("{:.2}", self.moving_time_min),
            format!("{:.1}", self.elevation_gain),
            self.activity_type.clone(),
            self.start_date.clone(),
        ]
    }
}
