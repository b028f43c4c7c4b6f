//! Data model for machine wear observations
//!
//! One `WearObservation` per source row, one `DerivedWear` per observation
//! out of the accumulator, and the `WearState` carried across a single
//! machine group's fold.

/// A normalized sensor observation for one machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WearObservation {
    /// Unique row identifier, used only to join derived values back onto
    /// the original table (never for logic)
    pub uid: String,
    /// Normalized machine-type key (the grouping key)
    pub machine: String,
    /// Timestamp used for intra-group ordering
    pub timestamp: i64,
    /// Raw cumulative-looking wear counter in minutes; 0 means the sensor
    /// produced no reading for this step
    pub tool_wear_min: i64,
    /// Failure flag: 1 marks a recorded tool failure event
    pub target: i64,
}

impl WearObservation {
    /// Whether this observation marks a recorded failure event
    pub fn is_failure(&self) -> bool {
        self.target == 1
    }
}

/// Running fold state for one machine group
///
/// Zeroed at each group boundary, updated once per observation, and
/// discarded when the group's fold completes. The first observation of a
/// group therefore sees `tool_wear_min = 0` and `failure = false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WearState {
    /// Last-seen raw wear counter
    pub tool_wear_min: i64,
    /// Last-computed incremental wear
    pub incremental: i64,
    /// Last-computed cumulative wear
    pub cumulative: i64,
    /// Last-computed wear since the most recent failure event
    pub since_last_failure: i64,
    /// Whether the last processed observation was a failure event
    pub failure: bool,
}

/// Derived wear features for one observation
///
/// Carries only the join key and the three derived features; the output
/// adapter attaches them back onto the originating row by `uid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedWear {
    pub uid: String,
    /// Wear accrued since the prior observation for the same machine
    pub incremental: i64,
    /// Total wear accrued since the machine's first observation
    pub cumulative: i64,
    /// Wear accrued since the most recent failure event
    pub since_last_failure: i64,
}
