// RiskMapper - CVSS v3.1 base score engine and asset risk register
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::Result;
use clap::Parser;
use riskmapper::config::RiskMapperConfig;
use riskmapper::{Args, CommandRouter};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging - respect RUST_LOG, then -v/-q
    let log_level = if args.output.quiet {
        Level::ERROR
    } else if args.output.verbose > 0 {
        Level::DEBUG
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|s| s.parse::<Level>().ok())
            .unwrap_or(Level::INFO)
    };

    // Logs go to stderr so JSON on stdout stays machine-readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.output.no_color {
        colored::control::set_override(false);
    }

    // Handle --config-example (generate example config and exit)
    if let Some(config_path) = &args.config_example {
        RiskMapperConfig::create_example(config_path)?;
        println!("✓ Example configuration saved to: {}", config_path.display());
        return Ok(());
    }

    let command = CommandRouter::route(args)?;
    debug!("Executing {}", command.name());
    command.execute()
}
