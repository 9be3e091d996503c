// Commands module - Command Pattern implementation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

mod command;
mod router;

// Individual command implementations
mod calculate;
mod import;

pub use command::Command;
pub use router::CommandRouter;

// Re-export individual commands for testing purposes
pub use calculate::CalculateCommand;
pub use import::ImportCommand;

use crate::config::RiskMapperConfig;
use crate::{Args, Result};
use tracing::debug;

/// Load the configuration file (or defaults) and apply CLI overrides
pub(crate) fn resolve_config(args: &Args) -> Result<RiskMapperConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            RiskMapperConfig::from_file(path)?
        }
        None => RiskMapperConfig::default(),
    };

    if args.output.colorblind {
        config.colorblind = true;
    }
    if let Some(latest) = args.output.latest {
        config.latest_limit = latest;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(&Args::default()).expect("defaults should load");
        assert_eq!(config.latest_limit, 10);
        assert!(!config.colorblind);
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "latest_limit = 3\ncolorblind = false").expect("write config");

        let mut args = Args::default();
        args.config = Some(file.path().to_path_buf());
        args.output.colorblind = true;
        args.output.latest = Some(5);

        let config = resolve_config(&args).expect("config should load");
        assert_eq!(config.latest_limit, 5);
        assert!(config.colorblind);
    }

    #[test]
    fn test_resolve_config_missing_file() {
        let mut args = Args::default();
        args.config = Some("/nonexistent/riskmapper.toml".into());
        assert!(resolve_config(&args).is_err());
    }
}
