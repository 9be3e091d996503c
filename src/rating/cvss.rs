// CVSS (Common Vulnerability Scoring System) v3.1 base scoring
// Reference: https://www.first.org/cvss/v3.1/specification-document

use super::metrics::{MetricLookup, MetricSet};
use super::severity::Severity;
use crate::error::CvssError;
use serde::{Deserialize, Serialize};

/// Subtracted before the ceiling so float noise just above a tenth
/// does not bump the result to the next tenth
const ROUNDING_EPSILON: f64 = 1e-9;

/// Outcome of a base score calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CvssResult {
    pub score: f64,
    pub severity: Severity,
    pub impact: f64,
    pub exploitability: f64,
}

/// CVSS v3.1 "round up" to one decimal place
pub fn round_up_1_decimal(x: f64) -> f64 {
    let rounded = (x * 10.0 - ROUNDING_EPSILON).ceil() / 10.0;
    // ceil(-epsilon) is -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// CVSS Calculator
pub struct CvssCalculator;

impl CvssCalculator {
    /// Exploitability sub score, unrounded
    pub fn exploitability(metrics: &MetricSet) -> f64 {
        8.22 * metrics.attack_vector.weight()
            * metrics.attack_complexity.weight()
            * metrics.privileges_required.weight(metrics.scope)
            * metrics.user_interaction.weight()
    }

    /// Impact sub score, unrounded and possibly negative for Scope=Changed
    pub fn impact(metrics: &MetricSet) -> f64 {
        // Impact Sub Score (ISS)
        let isc_base = 1.0
            - ((1.0 - metrics.confidentiality.weight())
                * (1.0 - metrics.integrity.weight())
                * (1.0 - metrics.availability.weight()));

        if metrics.scope.is_changed() {
            7.52 * (isc_base - 0.029) - 3.25 * (isc_base - 0.02).powf(15.0)
        } else {
            6.42 * isc_base
        }
    }

    /// Score an already validated metric set
    pub fn score(metrics: &MetricSet) -> CvssResult {
        let exploitability = Self::exploitability(metrics);
        let impact = Self::impact(metrics);

        let score = if impact <= 0.0 {
            0.0
        } else if metrics.scope.is_changed() {
            (1.08 * (impact + exploitability)).min(10.0)
        } else {
            (impact + exploitability).min(10.0)
        };

        let score = round_up_1_decimal(score);

        CvssResult {
            score,
            severity: Severity::from_score(score),
            impact: round_up_1_decimal(impact.max(0.0)),
            exploitability: round_up_1_decimal(exploitability),
        }
    }
}

/// Validate a raw metric mapping without scoring it
pub fn validate_metrics<M: MetricLookup + ?Sized>(metrics: &M) -> Result<(), CvssError> {
    MetricSet::parse(metrics).map(|_| ())
}

/// Validate a raw metric mapping and compute its base score
pub fn calculate_base_score<M: MetricLookup + ?Sized>(metrics: &M) -> Result<CvssResult, CvssError> {
    let set = MetricSet::parse(metrics)?;
    Ok(CvssCalculator::score(&set))
}

/// Validate a raw metric mapping and render its canonical vector string
pub fn vector_string<M: MetricLookup + ?Sized>(metrics: &M) -> Result<String, CvssError> {
    let set = MetricSet::parse(metrics)?;
    Ok(set.to_string())
}
