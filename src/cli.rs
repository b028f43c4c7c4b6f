//! CLI argument parsing for Desgaste

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for the enriched table and the -c summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated table (default)
    Csv,
    /// JSON for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "desgaste")]
#[command(version)]
#[command(about = "Tool-wear feature derivation for industrial machine sensor logs", long_about = None)]
pub struct Cli {
    /// Path to the raw machine observations CSV
    pub input: PathBuf,

    /// Where to write the enriched table (default: <INPUT stem>_with_tool_wear.<format>)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Print per-machine summary statistics instead of writing the enriched table
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Restrict derivation to specific machines (e.g., -e machine=l,m)
    #[arg(short = 'e', long = "expr", value_name = "EXPR")]
    pub filter: Option<String>,

    /// Fail on out-of-order timestamps instead of silently re-sorting
    #[arg(long = "strict-order")]
    pub strict_order: bool,

    /// Enable debug tracing to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_input_path() {
        let cli = Cli::parse_from(["desgaste", "observations.csv"]);
        assert_eq!(cli.input, PathBuf::from("observations.csv"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_format_defaults_to_csv() {
        let cli = Cli::parse_from(["desgaste", "observations.csv"]);
        assert_eq!(cli.format, OutputFormat::Csv);
    }

    #[test]
    fn test_cli_format_json() {
        let cli = Cli::parse_from(["desgaste", "--format", "json", "observations.csv"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_summary_flag() {
        let cli = Cli::parse_from(["desgaste", "-c", "observations.csv"]);
        assert!(cli.summary);
    }

    #[test]
    fn test_cli_summary_default_false() {
        let cli = Cli::parse_from(["desgaste", "observations.csv"]);
        assert!(!cli.summary);
    }

    #[test]
    fn test_cli_filter_expression() {
        let cli = Cli::parse_from(["desgaste", "-e", "machine=l,m", "observations.csv"]);
        assert_eq!(cli.filter.as_deref(), Some("machine=l,m"));
    }

    #[test]
    fn test_cli_strict_order_flag() {
        let cli = Cli::parse_from(["desgaste", "--strict-order", "observations.csv"]);
        assert!(cli.strict_order);
    }

    #[test]
    fn test_cli_output_path() {
        let cli = Cli::parse_from(["desgaste", "-o", "enriched.csv", "observations.csv"]);
        assert_eq!(cli.output, Some(PathBuf::from("enriched.csv")));
    }
}
