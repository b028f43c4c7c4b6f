//! Machine-group partitioning and time ordering
//!
//! One stable pass partitions observations by machine key, then each
//! group is sorted by timestamp ascending. Groups come back in
//! ascending key order, which fixes the row order of the enriched table
//! (machine, then time).

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::observation::WearObservation;

/// Raised under strict ordering only: an observation arrived earlier in
/// time than its predecessor within the same machine group.
#[derive(Error, Debug)]
#[error("Out-of-order timestamp for machine '{machine}' at input row {row}")]
pub struct OrderingViolation {
    pub machine: String,
    /// 0-based data row index in the input file
    pub row: usize,
}

/// One machine's observations, time-sorted ascending
#[derive(Debug, Clone)]
pub struct MachineGroup {
    pub machine: String,
    pub observations: Vec<WearObservation>,
}

/// Partition observations by machine key in a single pass and sort each
/// group by timestamp. The sort is stable, so observations with equal
/// timestamps keep their input order.
pub fn group_by_machine(observations: Vec<WearObservation>) -> Vec<MachineGroup> {
    let mut partitions: BTreeMap<String, Vec<WearObservation>> = BTreeMap::new();
    for obs in observations {
        partitions.entry(obs.machine.clone()).or_default().push(obs);
    }

    partitions
        .into_iter()
        .map(|(machine, mut observations)| {
            observations.sort_by_key(|obs| obs.timestamp);
            MachineGroup {
                machine,
                observations,
            }
        })
        .collect()
}

/// Check that the input file was already time-sorted within each machine
/// group. Must run against the observations in file order, before
/// `group_by_machine` re-sorts them.
pub fn verify_order(observations: &[WearObservation]) -> Result<(), OrderingViolation> {
    let mut last_seen: HashMap<&str, i64> = HashMap::new();

    for (row, obs) in observations.iter().enumerate() {
        if let Some(&last) = last_seen.get(obs.machine.as_str()) {
            if obs.timestamp < last {
                return Err(OrderingViolation {
                    machine: obs.machine.clone(),
                    row,
                });
            }
        }
        last_seen.insert(obs.machine.as_str(), obs.timestamp);
    }

    Ok(())
}
