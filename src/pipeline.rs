//! End-to-end derivation pipeline
//!
//! Orchestrates load -> normalize -> group -> accumulate -> join ->
//! write behind a configuration assembled from the CLI. The library
//! entry point `derive_from_path` stops short of writing anything, so
//! tests can exercise the whole flow in memory.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::accumulator;
use crate::cli::OutputFormat;
use crate::csv_input::{self, RawTable};
use crate::csv_output;
use crate::filter::MachineFilter;
use crate::grouping::{self, MachineGroup};
use crate::json_output;
use crate::observation::DerivedWear;
use crate::stats::WearStatsTracker;

/// Pipeline configuration assembled from CLI arguments
#[derive(Debug)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub summary: bool,
    pub filter: MachineFilter,
    pub strict_order: bool,
}

/// Everything one batch run derives, before any artifact is written
#[derive(Debug)]
pub struct DerivedBatch {
    /// The original table (normalized headers, filled cells)
    pub table: RawTable,
    /// Machine groups in ascending key order, time-sorted within
    pub groups: Vec<MachineGroup>,
    /// One derived record per retained observation, (machine, time) order
    pub derived: Vec<DerivedWear>,
    /// Per-machine summary statistics
    pub stats: WearStatsTracker,
}

/// Load the observations file and derive wear features for every
/// machine group that passes the filter.
pub fn derive_from_path(
    input: &Path,
    filter: &MachineFilter,
    strict_order: bool,
) -> Result<DerivedBatch> {
    let (table, observations) = csv_input::load_observations(input)
        .with_context(|| format!("Failed to load observations from {}", input.display()))?;

    let observations: Vec<_> = observations
        .into_iter()
        .filter(|obs| filter.should_include(&obs.machine))
        .collect();

    if strict_order {
        grouping::verify_order(&observations)?;
    }

    let groups = grouping::group_by_machine(observations);
    tracing::info!("partitioned {} machine groups", groups.len());

    let derived = accumulator::accumulate(&groups);

    let mut stats = WearStatsTracker::new();
    for (obs, record) in groups
        .iter()
        .flat_map(|group| &group.observations)
        .zip(&derived)
    {
        stats.record(&obs.machine, obs.is_failure(), record.cumulative);
    }

    Ok(DerivedBatch {
        table,
        groups,
        derived,
        stats,
    })
}

/// Run the whole batch: derive, then write the requested artifact.
///
/// Output is rendered into memory first and written in one shot, so an
/// error partway through derivation or the join never leaves a partial
/// file behind.
pub fn run(config: &PipelineConfig) -> Result<()> {
    let batch = derive_from_path(&config.input, &config.filter, config.strict_order)?;

    let mut buf = Vec::new();
    if config.summary {
        match config.format {
            OutputFormat::Csv => csv_output::write_summary(&mut buf, &batch.stats)?,
            OutputFormat::Json => json_output::write_summary(&mut buf, &batch.stats)?,
        }
        std::io::stdout().write_all(&buf)?;
    } else {
        match config.format {
            OutputFormat::Csv => csv_output::write_enriched(&mut buf, &batch.table, &batch.derived)?,
            OutputFormat::Json => {
                json_output::write_enriched(&mut buf, &batch.table, &batch.derived)?
            }
        }
        std::fs::write(&config.output, &buf)
            .with_context(|| format!("Failed to write {}", config.output.display()))?;
        tracing::info!(
            "wrote {} enriched rows to {}",
            batch.derived.len(),
            config.output.display()
        );
    }

    Ok(())
}

/// Default artifact path: next to the input, named after it
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("observations");
    let ext = match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    };
    input.with_file_name(format!("{stem}_with_tool_wear.{ext}"))
}
