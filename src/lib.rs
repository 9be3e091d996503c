// RiskMapper - CVSS v3.1 base score engine and asset risk register
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! RiskMapper scores security findings with the CVSS v3.1 base metric
//! formulas, maps scores to qualitative severity, and aggregates findings
//! per asset into a ranked risk register.
//!
//! The scoring entry points accept raw string metrics from any source
//! (maps, slices of pairs, import rows, CLI flags) through [`MetricLookup`]:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let metrics: HashMap<&str, &str> = [
//!     ("AV", "N"), ("AC", "L"), ("PR", "N"), ("UI", "N"),
//!     ("S", "U"), ("C", "H"), ("I", "H"), ("A", "H"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let result = riskmapper::calculate_base_score(&metrics).unwrap();
//! assert_eq!(result.score, 9.8);
//! assert_eq!(result.severity.as_str(), "Critical");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod rating;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::commands::{Command, CommandRouter};
pub use crate::error::{CvssError, RiskMapperError};
pub use crate::output::OutputFormat;
pub use crate::rating::{
    CvssResult, MetricLookup, MetricSet, Severity, calculate_base_score, validate_metrics,
    vector_string,
};
pub use crate::store::RiskRegister;

/// Result type for RiskMapper operations
pub type Result<T> = anyhow::Result<T>;

/// Error type for RiskMapper operations
pub use anyhow::Error;
