// ImportCommand - Build the risk register from import files
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, resolve_config};
use crate::input::{ImportSummary, import_records, load_file};
use crate::output::csv::write_csv_file;
use crate::output::json::{generate_json, write_json_file};
use crate::output::terminal::{Dashboard, ImportSummaryView};
use crate::output::{OutputFormat, RiskReport};
use crate::rating::Severity;
use crate::store::RiskRegister;
use crate::utils::DisplayConfig;
use crate::{Args, Result};
use tracing::info;

/// ImportCommand handles the register mode
///
/// This command is responsible for:
/// - Seeding the register with configured and `--asset` assets
/// - Importing each `--import` file, skipping rows that fail validation
/// - Printing the import summary and dashboard (or the JSON report)
/// - Exporting the report (--json) and findings (--csv)
pub struct ImportCommand {
    args: Args,
}

impl ImportCommand {
    /// Create a new ImportCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Build the register and import every file
    ///
    /// A file that cannot be read or parsed aborts the run; invalid rows
    /// inside a readable file are only skipped.
    pub fn build_register(&self) -> Result<(RiskRegister, ImportSummary)> {
        let config = resolve_config(&self.args)?;
        let mut register = RiskRegister::from_config(&config)?;

        for name in &self.args.import.assets {
            register.upsert_asset(name, &[], &[])?;
        }

        let mut summary = ImportSummary::default();
        for path in &self.args.import.files {
            let records = load_file(path, self.args.import.format)?;
            info!("Loaded {} record(s) from {}", records.len(), path.display());
            summary.merge(import_records(&mut register, &records));
        }

        Ok((register, summary))
    }
}

impl Command for ImportCommand {
    fn execute(&self) -> Result<()> {
        let config = resolve_config(&self.args)?;
        let display = DisplayConfig::new(config.colorblind);
        let min_severity = self.args.output.min_severity.unwrap_or(Severity::None);

        let (register, summary) = self.build_register()?;

        match self.args.output.output_format {
            OutputFormat::Terminal => {
                if !self.args.import.files.is_empty() {
                    println!(
                        "{}",
                        ImportSummaryView {
                            summary: &summary,
                            display: &display,
                        }
                    );
                }
                print!(
                    "{}",
                    Dashboard {
                        register: &register,
                        latest_limit: config.latest_limit,
                        min_severity,
                        display: &display,
                    }
                );
            }
            format => {
                let report =
                    RiskReport::from_register(&register, min_severity).with_import(summary.clone());
                println!("{}", generate_json(&report, format == OutputFormat::JsonPretty)?);
            }
        }

        if let Some(path) = &self.args.output.json {
            let report = RiskReport::from_register(&register, min_severity).with_import(summary);
            write_json_file(&report, &path.to_string_lossy(), self.args.output.json_pretty)?;
            println!("Report written to {}", path.display());
        }

        if let Some(path) = &self.args.output.csv {
            let findings = register.findings_at_least(min_severity);
            write_csv_file(findings, &path.to_string_lossy())?;
            println!("Findings exported to {}", path.display());
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "ImportCommand"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CSV: &str = "asset,title,AV,AC,PR,UI,S,C,I,A\n\
                       web-01,RCE,N,L,N,N,U,H,H,H\n\
                       web-01,Bad row,X,L,N,N,U,H,H,H\n\
                       db-01,Info leak,N,H,N,R,U,L,N,N\n";

    #[test]
    fn test_build_register_imports_and_skips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("findings.csv");
        std::fs::write(&path, CSV).unwrap();

        let mut args = Args::default();
        args.import.files = vec![path];
        args.import.assets = vec!["db-01".to_string()];

        let (register, summary) = ImportCommand::new(args).build_register().unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failures[0].row, 2);
        assert_eq!(register.findings().len(), 2);
        assert!(register.asset_by_name("db-01").is_some());
    }

    #[test]
    fn test_build_register_unreadable_file_fails() {
        let mut args = Args::default();
        args.import.files = vec!["/nonexistent/findings.csv".into()];
        assert!(ImportCommand::new(args).build_register().is_err());
    }

    #[test]
    fn test_execute_writes_exports() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("findings.csv");
        let json = dir.path().join("report.json");
        let csv = dir.path().join("export.csv");
        std::fs::write(&input, CSV).unwrap();

        let mut args = Args::default();
        args.import.files = vec![input];
        args.output.json = Some(json.clone());
        args.output.csv = Some(csv.clone());
        args.output.min_severity = Some(Severity::High);

        ImportCommand::new(args).execute().unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(report["findings"].as_array().unwrap().len(), 1);
        assert_eq!(report["import"]["skipped"], 1);

        let exported = std::fs::read_to_string(&csv).unwrap();
        assert_eq!(exported.lines().count(), 2);
        assert!(exported.contains("RCE"));
    }
}
