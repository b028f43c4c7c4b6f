//! Per-machine summary statistics for -c mode

use std::collections::BTreeMap;

/// Statistics for a single machine group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineStats {
    /// Number of observations recorded for this machine
    pub observations: u64,
    /// Number of observations flagged as failure events
    pub failures: u64,
    /// Final cumulative wear (last derived value for the group)
    pub cumulative_wear: i64,
}

/// Summary totals across all machines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTotals {
    pub total_observations: u64,
    pub total_failures: u64,
    pub total_cumulative_wear: i64,
}

/// Tracks summary statistics for all machine groups
///
/// Keyed by normalized machine name; BTreeMap keeps the summary in the
/// same ascending machine order as the enriched table.
#[derive(Debug, Default)]
pub struct WearStatsTracker {
    stats: BTreeMap<String, MachineStats>,
}

impl WearStatsTracker {
    /// Create a new statistics tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one derived observation. `cumulative` is the running
    /// cumulative wear at this observation; the last value recorded for
    /// a machine wins, so feeding observations in time order leaves the
    /// group's final cumulative wear in the tracker.
    pub fn record(&mut self, machine: &str, failure: bool, cumulative: i64) {
        let entry = self.stats.entry(machine.to_string()).or_default();
        entry.observations += 1;
        if failure {
            entry.failures += 1;
        }
        entry.cumulative_wear = cumulative;
    }

    /// Get access to the stats map for export
    pub fn stats_map(&self) -> &BTreeMap<String, MachineStats> {
        &self.stats
    }

    /// Calculate summary totals across all machines
    pub fn totals(&self) -> StatTotals {
        let mut totals = StatTotals {
            total_observations: 0,
            total_failures: 0,
            total_cumulative_wear: 0,
        };
        for stats in self.stats.values() {
            totals.total_observations += stats.observations;
            totals.total_failures += stats.failures;
            totals.total_cumulative_wear += stats.cumulative_wear;
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_counts_observations_and_failures() {
        let mut tracker = WearStatsTracker::new();
        tracker.record("l", false, 50);
        tracker.record("l", true, 80);
        tracker.record("l", false, 80);

        let stats = &tracker.stats_map()["l"];
        assert_eq!(stats.observations, 3);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.cumulative_wear, 80);
    }

    #[test]
    fn test_tracker_last_cumulative_wins() {
        let mut tracker = WearStatsTracker::new();
        tracker.record("m", false, 10);
        tracker.record("m", false, 45);

        assert_eq!(tracker.stats_map()["m"].cumulative_wear, 45);
    }

    #[test]
    fn test_tracker_machines_in_ascending_order() {
        let mut tracker = WearStatsTracker::new();
        tracker.record("m", false, 1);
        tracker.record("h", false, 2);
        tracker.record("l", false, 3);

        let machines: Vec<&str> = tracker.stats_map().keys().map(String::as_str).collect();
        assert_eq!(machines, vec!["h", "l", "m"]);
    }

    #[test]
    fn test_tracker_totals() {
        let mut tracker = WearStatsTracker::new();
        tracker.record("l", true, 80);
        tracker.record("m", false, 45);

        let totals = tracker.totals();
        assert_eq!(totals.total_observations, 2);
        assert_eq!(totals.total_failures, 1);
        assert_eq!(totals.total_cumulative_wear, 125);
    }

    #[test]
    fn test_tracker_empty_totals() {
        let tracker = WearStatsTracker::new();
        let totals = tracker.totals();
        assert_eq!(totals.total_observations, 0);
        assert_eq!(totals.total_failures, 0);
        assert_eq!(totals.total_cumulative_wear, 0);
    }
}
