//! Ledger file: semicolon separated CSV, UTF-8, one header row.

use crate::errors::{AppError, AppResult};
use crate::models::activity::{COLUMNS, LEGACY_COLUMNS, integral_id};
use crate::models::{Activity, Ledger};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

const DELIMITER: u8 = b';';

/// Load the ledger. A missing file is an empty ledger, not an error.
pub fn load_ledger(path: &Path) -> AppResult<Ledger> {
    if !path.exists() {
        return Ok(Ledger::empty());
    }

    let mut rdr = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)?;

    let layout = Layout::resolve(rdr.headers()?)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        // +2: header is line 1
        records.push(layout.parse(&row?, i + 2)?);
    }

    if layout.identifier.is_some() {
        Ok(Ledger::new(records))
    } else {
        Ok(Ledger::legacy(records))
    }
}

/// Rewrite the whole ledger. Parent directories are created as needed and
/// the file is replaced through a rename, so readers never see half a file.
pub fn persist_ledger(ledger: &Ledger, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_sibling(path)?;
    if let Err(e) = write_csv(&tmp, ledger.records()) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    fs::rename(&tmp, path)?;
    Ok(())
}

fn write_csv(path: &Path, records: &[Activity]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(COLUMNS)?;
    for a in records {
        wtr.serialize(a)?;
    }

    wtr.flush()?;
    Ok(())
}

fn temp_sibling(path: &Path) -> AppResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| AppError::Other(format!("Invalid ledger path: {}", path.display())))?;
    Ok(path.with_file_name(format!(".{}.tmp", name.to_string_lossy())))
}

/// Position of every canonical column inside the file header.
struct Layout {
    identifier: Option<usize>,
    athlete_name: usize,
    distance_km: usize,
    moving_time_min: usize,
    elevation_gain: usize,
    activity_type: usize,
    start_date: usize,
}

impl Layout {
    fn resolve(headers: &StringRecord) -> AppResult<Self> {
        let find = |i: usize| {
            headers.iter().position(|h| {
                let h = h.trim().trim_start_matches('\u{feff}');
                h == COLUMNS[i] || h == LEGACY_COLUMNS[i]
            })
        };

        let mut missing = Vec::new();
        let mut required = |i: usize| {
            find(i).unwrap_or_else(|| {
                missing.push(COLUMNS[i]);
                0
            })
        };

        let layout = Layout {
            identifier: find(0),
            athlete_name: required(1),
            distance_km: required(2),
            moving_time_min: required(3),
            elevation_gain: required(4),
            activity_type: required(5),
            start_date: required(6),
        };

        if !missing.is_empty() {
            return Err(AppError::LedgerShape(format!(
                "missing column(s): {}",
                missing.join(", ")
            )));
        }

        Ok(layout)
    }

    fn parse(&self, row: &StringRecord, line: usize) -> AppResult<Activity> {
        let identifier = match self.identifier.map(|idx| cell(row, idx)) {
            None | Some("") => None,
            Some(v) => Some(parse_id(v).ok_or_else(|| bad_cell(line, COLUMNS[0], v))?),
        };

        let float = |idx: usize, name: &str| -> AppResult<f64> {
            let v = cell(row, idx);
            v.parse::<f64>().map_err(|_| bad_cell(line, name, v))
        };

        Ok(Activity {
            identifier,
            athlete_name: cell(row, self.athlete_name).to_string(),
            distance_km: float(self.distance_km, COLUMNS[2])?,
            moving_time_min: float(self.moving_time_min, COLUMNS[3])?,
            elevation_gain: float(self.elevation_gain, COLUMNS[4])?,
            activity_type: cell(row, self.activity_type).to_string(),
            start_date: cell(row, self.start_date).to_string(),
        })
    }
}

fn cell(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("").trim()
}

/// Integer id; "123.0" is accepted too (older files stored ids as floats).
fn parse_id(v: &str) -> Option<i64> {
    v.parse::<i64>()
        .ok()
        .or_else(|| v.parse::<f64>().ok().and_then(integral_id))
}

fn bad_cell(line: usize, column: &str, value: &str) -> AppError {
    AppError::LedgerShape(format!(
        "line {line}: invalid value '{value}' in column '{column}'"
    ))
}
