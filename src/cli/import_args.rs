// Finding import arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::input::ImportFormat;
use clap::Args;
use std::path::PathBuf;

/// Finding import and asset tracking options
#[derive(Args, Debug, Clone, Default)]
pub struct ImportArgs {
    /// Import findings from a CSV or JSON file (repeatable)
    #[arg(short = 'f', long = "import", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Force the import format instead of detecting it from the extension
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<ImportFormat>,

    /// Track an asset by name in addition to those in the config (repeatable)
    #[arg(long = "asset", value_name = "NAME")]
    pub assets: Vec<String>,
}

impl ImportArgs {
    /// Whether the register-building mode was requested
    pub fn requested(&self) -> bool {
        !self.files.is_empty() || !self.assets.is_empty()
    }
}
