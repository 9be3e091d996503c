// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Parser;
use std::path::PathBuf;

// Sub-modules for organized CLI arguments
mod import_args;
mod metric_args;
mod output_args;

// Re-export sub-structs
pub use import_args::ImportArgs;
pub use metric_args::MetricArgs;
pub use output_args::OutputArgs;

/// RiskMapper - CVSS v3.1 base scoring and asset risk register
///
/// The Args struct composes the domain-specific sub-structs with
/// clap's #[command(flatten)] attribute:
/// - Base metrics for a single calculation (MetricArgs)
/// - Finding import and asset tracking (ImportArgs)
/// - Output formats and display (OutputArgs)
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, long_about = None)]
#[command(name = "riskmapper")]
#[command(about = "CVSS v3.1 base score calculator and asset risk register", long_about = None)]
pub struct Args {
    // ============ Calculation ============
    /// Score a full vector string, e.g. CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H
    #[arg(long = "vector", value_name = "VECTOR")]
    pub vector: Option<String>,

    #[command(flatten)]
    pub metrics: MetricArgs,

    // ============ Register ============
    #[command(flatten)]
    pub import: ImportArgs,

    // ============ Output ============
    #[command(flatten)]
    pub output: OutputArgs,

    // ============ Configuration ============
    /// Configuration file (TOML)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write an example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,
}

impl Args {
    /// Check if a single score calculation was requested
    pub fn wants_calculation(&self) -> bool {
        self.vector.is_some() || self.metrics.any()
    }

    /// Check if the register (import) mode was requested
    pub fn wants_import(&self) -> bool {
        self.import.requested()
    }
}
