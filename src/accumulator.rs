//! Per-machine sequential wear accumulator
//!
//! Walks each machine group's time-sorted observations once, carrying a
//! `WearState` from step to step. Every step depends on the previous
//! step's full derived state, so a group's fold is strictly sequential;
//! different machine groups never share state.

use crate::grouping::MachineGroup;
use crate::observation::{DerivedWear, WearObservation, WearState};

/// Advance the fold by one observation, producing the next state and the
/// derived record for this step.
///
/// Wear policies:
/// - a zero wear counter means "no reading this step", so the increment
///   is 0 rather than a delta back down to zero
/// - counter resets (tool replacement) produce negative increments,
///   which propagate unclamped into both running sums
/// - the since-last-failure total resets when the *previous* observation
///   was a failure event, not the current one
pub fn step(state: &WearState, obs: &WearObservation) -> (WearState, DerivedWear) {
    let incremental = if obs.tool_wear_min == 0 {
        0
    } else {
        obs.tool_wear_min - state.tool_wear_min
    };

    let since_last_failure = if state.failure {
        incremental
    } else {
        state.since_last_failure + incremental
    };

    let cumulative = state.cumulative + incremental;

    let next = WearState {
        tool_wear_min: obs.tool_wear_min,
        incremental,
        cumulative,
        since_last_failure,
        failure: obs.is_failure(),
    };

    let derived = DerivedWear {
        uid: obs.uid.clone(),
        incremental,
        cumulative,
        since_last_failure,
    };

    (next, derived)
}

/// Fold every machine group independently, emitting one derived record
/// per observation in group-then-time order.
///
/// The caller guarantees each group is already time-sorted; unsorted
/// input silently produces wrong sums rather than an error.
pub fn accumulate(groups: &[MachineGroup]) -> Vec<DerivedWear> {
    let total: usize = groups.iter().map(|g| g.observations.len()).sum();
    let mut derived = Vec::with_capacity(total);

    for group in groups {
        tracing::debug!(
            "accumulating {} observations for machine '{}'",
            group.observations.len(),
            group.machine
        );

        let mut state = WearState::default();
        for obs in &group.observations {
            let (next, record) = step(&state, obs);
            state = next;
            derived.push(record);
        }
    }

    derived
}
