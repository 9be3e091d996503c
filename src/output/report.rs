// Risk report - serializable snapshot of the register

use crate::input::ImportSummary;
use crate::rating::Severity;
use crate::store::{Finding, RankedAsset, RiskRegister, SeverityCounts};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub severity_counts: SeverityCounts,
    pub assets: Vec<RankedAsset>,
    pub untracked_assets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<ImportSummary>,
    pub findings: Vec<Finding>,
}

impl RiskReport {
    /// Snapshot the register, keeping findings at or above `min_severity`
    /// (newest first)
    pub fn from_register(register: &RiskRegister, min_severity: Severity) -> Self {
        let findings: Vec<Finding> = register
            .findings()
            .iter()
            .rev()
            .filter(|f| f.severity >= min_severity)
            .cloned()
            .collect();

        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            severity_counts: register.severity_counts(),
            assets: register.ranked_assets(),
            untracked_assets: register
                .untracked_asset_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            import: None,
            findings,
        }
    }

    pub fn with_import(mut self, summary: ImportSummary) -> Self {
        self.import = Some(summary);
        self
    }
}
