// Command trait - Defines the interface for all command implementations
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;

/// Command trait - Defines the interface for all command implementations
///
/// Each operational mode of RiskMapper (a single calculation, building
/// the risk register from import files) is an independent command object.
/// A command validates its own preconditions, runs, and reports failure
/// through the returned Result.
pub trait Command: Send + Sync {
    /// Execute the command
    ///
    /// # Errors
    /// Metric validation failures surface as `CvssError`; file and
    /// configuration problems as `RiskMapperError`.
    fn execute(&self) -> Result<()>;

    /// Get a human-readable name for this command (for logging/debugging)
    fn name(&self) -> &'static str;
}
