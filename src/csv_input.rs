//! CSV input adapter
//!
//! Loads the raw observation table, normalizes header labels, fills
//! missing values, and builds typed observations. Columns are resolved
//! by normalized header name rather than position, so the loader is
//! robust to column reordering and to extra columns it does not use.

use std::path::Path;

use thiserror::Error;

use crate::normalize::{normalize_header, normalize_machine};
use crate::observation::WearObservation;

/// Fill value for empty passthrough cells, carried through to the
/// persisted artifact
pub const MISSING_SENTINEL: &str = "missing_observations";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Missing column '{name}' in observations CSV")]
    MissingColumn { name: String },

    #[error("Row {row}, column '{column}': malformed value '{value}'")]
    MalformedField {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The full original table, kept for the output join: normalized header
/// labels plus every row with empty cells already filled.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Position of a column by its normalized label
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Parse an integer cell. Wear counters exported through spreadsheet
/// tooling are sometimes stored as float strings like "50.0", so we
/// accept those and truncate.
fn parse_int(row: usize, column: &'static str, value: &str) -> Result<i64, LoadError> {
    let trimmed = value.trim();
    trimmed
        .parse::<i64>()
        .or_else(|_| trimmed.parse::<f64>().map(|v| v as i64))
        .map_err(|_| LoadError::MalformedField {
            row,
            column,
            value: value.to_string(),
        })
}

/// A key cell (uid, machine type, timestamp) cannot be defaulted; empty
/// means the row is unusable.
fn require_cell<'a>(
    row: usize,
    column: &'static str,
    value: &'a str,
) -> Result<&'a str, LoadError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LoadError::MalformedField {
            row,
            column,
            value: value.to_string(),
        });
    }
    Ok(trimmed)
}

/// Load the observations CSV into the raw table (for the final join)
/// plus one typed `WearObservation` per row.
///
/// Rows come back in file order; grouping and time-sorting happen later.
pub fn load_observations(path: &Path) -> Result<(RawTable, Vec<WearObservation>), LoadError> {
    let mut rdr = csv::Reader::from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(normalize_header).collect();

    let col = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn {
                name: name.to_string(),
            })
    };

    let i_uid = col("uid")?;
    let i_machine = col("machine_type")?;
    let i_timestamp = col("timestamp")?;
    let i_wear = col("tool_wear_[min]")?;
    let i_target = col("target")?;

    let mut rows = Vec::new();
    let mut observations = Vec::new();

    for (row_num, result) in rdr.records().enumerate() {
        let record = result?;

        // Empty numeric cells become 0, other empty cells become the
        // sentinel string. Key cells are checked below instead.
        let cells: Vec<String> = record
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if !cell.trim().is_empty() {
                    cell.to_string()
                } else if i == i_wear || i == i_target {
                    "0".to_string()
                } else {
                    MISSING_SENTINEL.to_string()
                }
            })
            .collect();

        let uid = require_cell(row_num, "uid", &record[i_uid])?;
        let machine_raw = require_cell(row_num, "machine_type", &record[i_machine])?;
        let timestamp = parse_int(
            row_num,
            "timestamp",
            require_cell(row_num, "timestamp", &record[i_timestamp])?,
        )?;

        observations.push(WearObservation {
            uid: uid.to_string(),
            machine: normalize_machine(machine_raw),
            timestamp,
            tool_wear_min: parse_int(row_num, "tool_wear_[min]", &cells[i_wear])?,
            target: parse_int(row_num, "target", &cells[i_target])?,
        });
        rows.push(cells);
    }

    tracing::info!("loaded {} observations from {}", rows.len(), path.display());

    Ok((RawTable { headers, rows }, observations))
}
