//! Label normalization for header names and machine-type keys
//!
//! Source files arrive with inconsistent casing and spacing in both the
//! header row ("Tool Wear [min]") and the machine-type column
//! ("Low_Speed", "low speed "). Both are collapsed to one canonical form
//! before any lookup or grouping happens.

/// Normalize a CSV header label: trimmed, lowercase, spaces become
/// underscores. "Tool Wear [min]" resolves as "tool_wear_[min]".
pub fn normalize_header(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Normalize a machine-type value into the canonical grouping key:
/// trimmed, lowercase, underscores stripped. Two readings from the same
/// physical machine always collapse to the same key.
pub fn normalize_machine(label: &str) -> String {
    label.trim().to_lowercase().replace('_', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_lowercases_and_underscores() {
        assert_eq!(normalize_header("Tool Wear [min]"), "tool_wear_[min]");
        assert_eq!(normalize_header("Machine Type"), "machine_type");
        assert_eq!(normalize_header("UID"), "uid");
    }

    #[test]
    fn test_normalize_header_trims_whitespace() {
        assert_eq!(normalize_header("  Timestamp "), "timestamp");
    }

    #[test]
    fn test_normalize_header_idempotent() {
        assert_eq!(normalize_header("tool_wear_[min]"), "tool_wear_[min]");
    }

    #[test]
    fn test_normalize_machine_strips_underscores() {
        assert_eq!(normalize_machine("Low_Speed"), "lowspeed");
        assert_eq!(normalize_machine("low_speed"), "lowspeed");
    }

    #[test]
    fn test_normalize_machine_collapses_case_and_whitespace_variants() {
        assert_eq!(normalize_machine("  M  "), normalize_machine("m"));
        assert_eq!(normalize_machine("High_speed"), normalize_machine("HIGH_SPEED"));
    }
}
