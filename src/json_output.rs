//! JSON output for the enriched observation table and the -c summary

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::csv_input::RawTable;
use crate::observation::DerivedWear;
use crate::stats::WearStatsTracker;

/// One enriched observation row
///
/// Original columns are carried as strings under their normalized
/// labels; the three derived features are proper integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEnrichedRow {
    /// Original columns by normalized label
    #[serde(flatten)]
    pub columns: BTreeMap<String, String>,
    pub correct_tool_wear_observation: i64,
    pub cumulative_tool_wear: i64,
    pub tool_wear_since_last_failure: i64,
}

/// Per-machine summary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonMachineSummary {
    pub machine: String,
    pub observations: u64,
    pub failures: u64,
    pub cumulative_wear: i64,
}

/// Summary totals across all machines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummaryTotals {
    pub observations: u64,
    pub failures: u64,
    pub cumulative_wear: i64,
}

/// Top-level -c summary document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub machines: Vec<JsonMachineSummary>,
    pub totals: JsonSummaryTotals,
}

/// Build the enriched rows by joining derived features onto their
/// originating table rows by uid, in derived (machine, time) order.
pub fn enriched_rows(table: &RawTable, derived: &[DerivedWear]) -> Result<Vec<JsonEnrichedRow>> {
    let uid_idx = table
        .column("uid")
        .context("Observations table has no uid column")?;

    let by_uid: BTreeMap<&str, &Vec<String>> = table
        .rows
        .iter()
        .map(|row| (row[uid_idx].as_str(), row))
        .collect();

    derived
        .iter()
        .map(|record| {
            let row = by_uid
                .get(record.uid.as_str())
                .ok_or_else(|| anyhow!("Derived record references unknown uid '{}'", record.uid))?;

            let columns: BTreeMap<String, String> = table
                .headers
                .iter()
                .cloned()
                .zip((*row).iter().cloned())
                .collect();

            Ok(JsonEnrichedRow {
                columns,
                correct_tool_wear_observation: record.incremental,
                cumulative_tool_wear: record.cumulative,
                tool_wear_since_last_failure: record.since_last_failure,
            })
        })
        .collect()
}

/// Write the enriched table as a pretty-printed JSON array
pub fn write_enriched<W: Write>(out: W, table: &RawTable, derived: &[DerivedWear]) -> Result<()> {
    let rows = enriched_rows(table, derived)?;
    serde_json::to_writer_pretty(out, &rows)?;
    Ok(())
}

/// Write the per-machine summary as a pretty-printed JSON document
pub fn write_summary<W: Write>(out: W, tracker: &WearStatsTracker) -> Result<()> {
    let machines = tracker
        .stats_map()
        .iter()
        .map(|(machine, stats)| JsonMachineSummary {
            machine: machine.clone(),
            observations: stats.observations,
            failures: stats.failures,
            cumulative_wear: stats.cumulative_wear,
        })
        .collect();

    let totals = tracker.totals();
    let summary = JsonSummary {
        machines,
        totals: JsonSummaryTotals {
            observations: totals.total_observations,
            failures: totals.total_failures,
            cumulative_wear: totals.total_cumulative_wear,
        },
    };

    serde_json::to_writer_pretty(out, &summary)?;
    Ok(())
}
