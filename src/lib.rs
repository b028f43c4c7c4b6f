//! Desgaste - Tool-wear feature derivation for industrial machine sensor logs
//!
//! This library reconstructs each machine's chronological tool-wear
//! history from a raw observation log and derives three running features
//! per reading: incremental wear since the prior reading, cumulative
//! wear since the machine's first observation, and wear accumulated
//! since the most recent recorded failure event.

pub mod accumulator;
pub mod cli;
pub mod csv_input;
pub mod csv_output;
pub mod filter;
pub mod grouping;
pub mod json_output;
pub mod normalize;
pub mod observation;
pub mod pipeline;
pub mod stats;
