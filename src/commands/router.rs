// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{CalculateCommand, Command, ImportCommand};
use crate::{Args, Result, invalid_input};

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Routing priority:
/// 1. Register mode (--import, --asset)
/// 2. Single calculation (--vector or the metric flags)
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    ///
    /// # Errors
    /// Returns `InvalidInput` when no mode was requested or the arguments
    /// combine modes that cannot run together.
    pub fn route(args: Args) -> Result<Box<dyn Command>> {
        Self::validate_routing(&args)?;

        if args.wants_import() {
            return Ok(Box::new(ImportCommand::new(args)));
        }

        if args.wants_calculation() {
            return Ok(Box::new(CalculateCommand::new(args)));
        }

        invalid_input!(
            "Nothing to do: give --vector or all eight metric flags (--av --ac --pr --ui --s --c --i --a), or --import FILE"
        )
    }

    /// Check that the argument combination can be routed
    pub fn validate_routing(args: &Args) -> Result<()> {
        if args.vector.is_some() && args.metrics.any() {
            invalid_input!("Use either --vector or the individual metric flags, not both");
        }

        if args.wants_import() && args.wants_calculation() {
            invalid_input!("Cannot combine a single calculation with --import/--asset. Choose one mode.");
        }

        Ok(())
    }
}
