//! Machine filtering for -e machine= expressions
//!
//! Supports restricting derivation to named machine groups:
//! -e machine=l,m or -e machine=lowspeed

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::normalize::normalize_machine;

/// Filter that decides which machine groups are derived and emitted
#[derive(Debug, Clone)]
pub struct MachineFilter {
    /// Set of normalized machine keys to include (None = all machines)
    include: Option<HashSet<String>>,
}

impl MachineFilter {
    /// Create a filter that includes every machine
    pub fn all() -> Self {
        Self { include: None }
    }

    /// Parse a filter expression like "machine=l,m". Names go through
    /// the same normalization as the machine_type column, so
    /// "machine=Low_Speed" matches rows labeled "low speed".
    pub fn from_expr(expr: &str) -> Result<Self> {
        if let Some(spec) = expr.strip_prefix("machine=") {
            let machines: HashSet<String> = spec
                .split(',')
                .map(normalize_machine)
                .filter(|m| !m.is_empty())
                .collect();

            if machines.is_empty() {
                bail!("Empty machine list in filter expression: {}", expr);
            }

            Ok(Self {
                include: Some(machines),
            })
        } else {
            bail!(
                "Invalid filter expression: {}. Expected format: machine=NAME[,NAME...]",
                expr
            );
        }
    }

    /// Check if a normalized machine key passes the filter
    pub fn should_include(&self, machine: &str) -> bool {
        match &self.include {
            None => true, // No filter = derive all machines
            Some(set) => set.contains(machine),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_includes_everything() {
        let filter = MachineFilter::all();
        assert!(filter.should_include("l"));
        assert!(filter.should_include("anything"));
    }

    #[test]
    fn test_filter_individual_machine() {
        let filter = MachineFilter::from_expr("machine=l").unwrap();
        assert!(filter.should_include("l"));
        assert!(!filter.should_include("m"));
    }

    #[test]
    fn test_filter_multiple_machines() {
        let filter = MachineFilter::from_expr("machine=l,m").unwrap();
        assert!(filter.should_include("l"));
        assert!(filter.should_include("m"));
        assert!(!filter.should_include("h"));
    }

    #[test]
    fn test_filter_normalizes_names() {
        let filter = MachineFilter::from_expr("machine=Low_Speed").unwrap();
        assert!(filter.should_include("lowspeed"));
    }

    #[test]
    fn test_filter_rejects_bad_expression() {
        assert!(MachineFilter::from_expr("trace=l").is_err());
        assert!(MachineFilter::from_expr("machine=").is_err());
        assert!(MachineFilter::from_expr("machine=,,").is_err());
    }
}
