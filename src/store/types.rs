// Register types - assets, findings and risk aggregates

use crate::rating::{CvssResult, MetricSet, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tracked asset (a host, service or application on the attack surface)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub tags: Vec<String>,
    pub services: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Scored finding recorded against an asset name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: Uuid,
    pub asset_name: String,
    pub title: String,
    pub metrics: MetricSet,
    pub score: f64,
    pub severity: Severity,
    pub impact: f64,
    pub exploitability: f64,
    pub vector: String,
    pub created_at: DateTime<Utc>,
}

impl Finding {
    pub(crate) fn new(asset_name: String, title: String, metrics: MetricSet, result: CvssResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_name,
            title,
            metrics,
            score: result.score,
            severity: result.severity,
            impact: result.impact,
            exploitability: result.exploitability,
            vector: metrics.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Number of findings per severity band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub none: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
            Severity::None => self.none += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::None => self.none,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.none
    }
}

impl<'a> FromIterator<&'a Finding> for SeverityCounts {
    fn from_iter<T: IntoIterator<Item = &'a Finding>>(iter: T) -> Self {
        let mut counts = SeverityCounts::default();
        for finding in iter {
            counts.record(finding.severity);
        }
        counts
    }
}

/// Risk summary of the findings mapped to one asset name
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRisk {
    pub finding_count: usize,
    pub max_score: f64,
    pub avg_score: f64,
    pub counts: SeverityCounts,
}

impl AssetRisk {
    pub fn from_findings<'a, I>(findings: I) -> Self
    where
        I: IntoIterator<Item = &'a Finding>,
    {
        let scores: Vec<(f64, Severity)> = findings
            .into_iter()
            .map(|f| (f.score, f.severity))
            .collect();

        if scores.is_empty() {
            return Self::default();
        }

        let mut counts = SeverityCounts::default();
        for (_, severity) in &scores {
            counts.record(*severity);
        }

        let max_score = scores.iter().map(|(s, _)| *s).fold(0.0, f64::max);
        let avg_score = scores.iter().map(|(s, _)| *s).sum::<f64>() / scores.len() as f64;

        Self {
            finding_count: scores.len(),
            max_score,
            avg_score,
            counts,
        }
    }
}

/// Tracked asset together with its risk summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedAsset {
    pub asset: Asset,
    pub risk: AssetRisk,
}
