// Output format configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::output::OutputFormat;
use crate::rating::Severity;
use clap::Args;
use std::path::PathBuf;

fn parse_severity(s: &str) -> Result<Severity, String> {
    Severity::from_label(s)
        .ok_or_else(|| format!("unknown severity '{}' (none, low, medium, high, critical)", s))
}

/// Output format and display options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Format of the report printed to stdout
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Terminal)]
    pub output_format: OutputFormat,

    /// Write the risk report to a JSON file
    #[arg(long = "json", value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Pretty print JSON file output
    #[arg(long = "json-pretty")]
    pub json_pretty: bool,

    /// Export findings to a CSV file
    #[arg(long = "csv", value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Only list findings at or above this severity
    #[arg(long = "min-severity", value_name = "LEVEL", value_parser = parse_severity)]
    pub min_severity: Option<Severity>,

    /// Number of findings in the "latest" panel (overrides config)
    #[arg(long = "latest", value_name = "N")]
    pub latest: Option<usize>,

    /// Quiet mode (only errors are logged)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Colorblind mode (adjust colors for accessibility)
    #[arg(long = "colorblind")]
    pub colorblind: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_severity() {
        assert_eq!(parse_severity("HIGH"), Ok(Severity::High));
        assert!(parse_severity("urgent").is_err());
    }
}
