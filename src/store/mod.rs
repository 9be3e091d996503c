// Risk Register - tracked assets and the findings scored against them
//
// The register lives for the duration of one command; it is not persisted.

pub mod types;

pub use types::{Asset, AssetRisk, Finding, RankedAsset, SeverityCounts};

use crate::config::{DEFAULT_ASSET, DEFAULT_TITLE, RiskMapperConfig};
use crate::error::{CvssError, RiskMapperError};
use crate::rating::{CvssCalculator, MetricLookup, MetricSet, Severity};
use chrono::Utc;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::{debug, info};
use uuid::Uuid;

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// In-memory register of assets and findings, in insertion order
pub struct RiskRegister {
    assets: Vec<Asset>,
    findings: Vec<Finding>,
    default_asset: String,
    default_title: String,
}

impl RiskRegister {
    /// Create new empty register
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            findings: Vec::new(),
            default_asset: DEFAULT_ASSET.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Create a register seeded with the configured assets and defaults
    pub fn from_config(config: &RiskMapperConfig) -> Result<Self, RiskMapperError> {
        let mut register = Self {
            default_asset: config.default_asset.trim().to_string(),
            default_title: config.default_title.trim().to_string(),
            ..Self::new()
        };

        for asset in &config.assets {
            register.upsert_asset(&asset.name, &asset.tags, &asset.services)?;
        }

        debug!("Register seeded with {} asset(s)", register.assets.len());
        Ok(register)
    }

    // --- Assets ---

    /// Add an asset, or replace the tags and services of the one with the same name
    pub fn upsert_asset(
        &mut self,
        name: &str,
        tags: &[String],
        services: &[String],
    ) -> Result<&Asset, RiskMapperError> {
        let name = name.trim();
        if name.is_empty() {
            crate::invalid_input!("Asset name is required");
        }

        let tags = clean_list(tags);
        let services = clean_list(services);

        let index = match self.assets.iter().position(|a| a.name == name) {
            Some(index) => {
                debug!("Updating asset '{}'", name);
                let existing = &mut self.assets[index];
                existing.tags = tags;
                existing.services = services;
                index
            }
            None => {
                debug!("Adding asset '{}'", name);
                self.assets.push(Asset {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    tags,
                    services,
                    created_at: Utc::now(),
                });
                self.assets.len() - 1
            }
        };

        Ok(&self.assets[index])
    }

    /// Remove an asset; its findings stay in the register
    pub fn remove_asset(&mut self, id: Uuid) -> Option<Asset> {
        let index = self.assets.iter().position(|a| a.id == id)?;
        Some(self.assets.remove(index))
    }

    pub fn asset_by_name(&self, name: &str) -> Option<&Asset> {
        let name = name.trim();
        self.assets.iter().find(|a| a.name == name)
    }

    /// All assets, newest first
    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter().rev()
    }

    // --- Findings ---

    /// Score a raw metric mapping and record it as a finding
    ///
    /// Nothing is recorded when the metrics do not validate.
    pub fn add_finding<M: MetricLookup + ?Sized>(
        &mut self,
        asset_name: &str,
        title: &str,
        metrics: &M,
    ) -> Result<&Finding, CvssError> {
        let set = MetricSet::parse(metrics)?;
        Ok(self.add_scored(asset_name, title, set))
    }

    /// Record an already validated metric set
    pub fn add_scored(&mut self, asset_name: &str, title: &str, metrics: MetricSet) -> &Finding {
        let result = CvssCalculator::score(&metrics);
        let finding = Finding::new(
            or_default(asset_name, &self.default_asset),
            or_default(title, &self.default_title),
            metrics,
            result,
        );

        info!(
            "Recorded finding '{}' on '{}': {:.1} {}",
            finding.title, finding.asset_name, finding.score, finding.severity
        );

        self.findings.push(finding);
        &self.findings[self.findings.len() - 1]
    }

    pub fn remove_finding(&mut self, id: Uuid) -> Option<Finding> {
        let index = self.findings.iter().position(|f| f.id == id)?;
        Some(self.findings.remove(index))
    }

    /// All findings, in insertion order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// The `limit` most recently added findings, newest first
    pub fn latest_findings(&self, limit: usize) -> Vec<&Finding> {
        self.findings.iter().rev().take(limit).collect()
    }

    /// Findings mapped to an asset name, highest score first
    pub fn findings_for_asset(&self, asset_name: &str) -> Vec<&Finding> {
        let mut findings: Vec<&Finding> = self
            .findings
            .iter()
            .filter(|f| f.asset_name == asset_name)
            .collect();
        findings.sort_by(|a, b| b.score.total_cmp(&a.score));
        findings
    }

    // --- Analytics ---

    pub fn severity_counts(&self) -> SeverityCounts {
        self.findings.iter().collect()
    }

    pub fn asset_risk(&self, asset_name: &str) -> AssetRisk {
        AssetRisk::from_findings(self.findings.iter().filter(|f| f.asset_name == asset_name))
    }

    /// Tracked assets ordered by max score, then average score, then name
    pub fn ranked_assets(&self) -> Vec<RankedAsset> {
        let mut ranked: Vec<RankedAsset> = self
            .assets
            .iter()
            .map(|asset| RankedAsset {
                risk: self.asset_risk(&asset.name),
                asset: asset.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.risk
                .max_score
                .total_cmp(&a.risk.max_score)
                .then_with(|| b.risk.avg_score.total_cmp(&a.risk.avg_score))
                .then_with(|| a.asset.name.cmp(&b.asset.name))
        });
        ranked
    }

    /// Asset names referenced by findings but not tracked as assets
    pub fn untracked_asset_names(&self) -> Vec<&str> {
        let tracked: BTreeSet<&str> = self.assets.iter().map(|a| a.name.as_str()).collect();
        let untracked: BTreeSet<&str> = self
            .findings
            .iter()
            .map(|f| f.asset_name.as_str())
            .filter(|name| !tracked.contains(name))
            .collect();
        untracked.into_iter().collect()
    }

    /// Findings with the given minimum severity, highest score first
    pub fn findings_at_least(&self, severity: Severity) -> Vec<&Finding> {
        let mut findings: Vec<&Finding> = self
            .findings
            .iter()
            .filter(|f| f.severity >= severity)
            .collect();
        findings.sort_by(|a, b| match b.score.total_cmp(&a.score) {
            Ordering::Equal => a.asset_name.cmp(&b.asset_name),
            other => other,
        });
        findings
    }
}

impl Default for RiskRegister {
    fn default() -> Self {
        Self::new()
    }
}
