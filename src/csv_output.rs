//! CSV output for the enriched observation table and the -c summary

use std::collections::HashMap;
use std::io::Write;

use anyhow::{anyhow, Context, Result};

use crate::csv_input::RawTable;
use crate::observation::DerivedWear;
use crate::stats::WearStatsTracker;

/// Column labels appended to the original table, in output order
pub const DERIVED_COLUMNS: [&str; 3] = [
    "correct_tool_wear_observation",
    "cumulative_tool_wear",
    "tool_wear_since_last_failure",
];

/// Join derived features onto their originating rows by uid and write
/// the enriched table as CSV.
///
/// Row order follows the derived sequence (machine, then time). Helper
/// values used only for the computation (normalized machine key, parsed
/// integers) never appear as columns.
pub fn write_enriched<W: Write>(
    out: W,
    table: &RawTable,
    derived: &[DerivedWear],
) -> Result<()> {
    let uid_idx = table
        .column("uid")
        .context("Observations table has no uid column")?;

    let by_uid: HashMap<&str, &Vec<String>> = table
        .rows
        .iter()
        .map(|row| (row[uid_idx].as_str(), row))
        .collect();

    let mut wtr = csv::Writer::from_writer(out);

    let mut header: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    header.extend(DERIVED_COLUMNS);
    wtr.write_record(&header)?;

    for record in derived {
        let row = by_uid
            .get(record.uid.as_str())
            .ok_or_else(|| anyhow!("Derived record references unknown uid '{}'", record.uid))?;

        let mut cells: Vec<String> = (*row).clone();
        cells.push(record.incremental.to_string());
        cells.push(record.cumulative.to_string());
        cells.push(record.since_last_failure.to_string());
        wtr.write_record(&cells)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the per-machine summary as CSV (one row per machine)
pub fn write_summary<W: Write>(out: W, tracker: &WearStatsTracker) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["machine", "observations", "failures", "cumulative_wear"])?;
    for (machine, stats) in tracker.stats_map() {
        wtr.write_record([
            machine.as_str(),
            &stats.observations.to_string(),
            &stats.failures.to_string(),
            &stats.cumulative_wear.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
