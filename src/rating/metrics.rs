// CVSS v3.1 Base Metrics
// Reference: https://www.first.org/cvss/v3.1/specification-document
//
// Raw metric mappings (forms, CSV rows, JSON objects) cross into the engine
// through `MetricLookup`; once parsed into a `MetricSet` every value is a
// typed variant with a fixed weight.

use crate::error::CvssError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::str::FromStr;

/// The eight base metric keys, in validation and vector order
pub const METRIC_FIELDS: [&str; 8] = ["AV", "AC", "PR", "UI", "S", "C", "I", "A"];

/// Prefix of every CVSS v3.1 vector string
pub const VECTOR_PREFIX: &str = "CVSS:3.1";

/// Read access to a string-keyed metric mapping
///
/// Implemented for the common map types so callers can hand over whatever
/// shape their input already has. Keys beyond the eight base metrics are
/// never looked at.
pub trait MetricLookup {
    fn metric(&self, key: &str) -> Option<&str>;
}

impl<K, V, S> MetricLookup for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn metric(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

impl<K, V> MetricLookup for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn metric(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

impl<K, V> MetricLookup for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn metric(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl<T: MetricLookup + ?Sized> MetricLookup for &T {
    fn metric(&self, key: &str) -> Option<&str> {
        (**self).metric(key)
    }
}

/// A single-letter metric value with a closed set of legal codes
pub trait MetricValue: Sized + Copy {
    /// Legal codes, sorted
    const ALLOWED: &'static [&'static str];

    fn from_code(code: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackVector {
    Network,  // N - 0.85
    Adjacent, // A - 0.62
    Local,    // L - 0.55
    Physical, // P - 0.2
}

impl AttackVector {
    pub fn weight(&self) -> f64 {
        match self {
            AttackVector::Network => 0.85,
            AttackVector::Adjacent => 0.62,
            AttackVector::Local => 0.55,
            AttackVector::Physical => 0.20,
        }
    }
}

impl MetricValue for AttackVector {
    const ALLOWED: &'static [&'static str] = &["A", "L", "N", "P"];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(AttackVector::Network),
            "A" => Some(AttackVector::Adjacent),
            "L" => Some(AttackVector::Local),
            "P" => Some(AttackVector::Physical),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            AttackVector::Network => "N",
            AttackVector::Adjacent => "A",
            AttackVector::Local => "L",
            AttackVector::Physical => "P",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackComplexity {
    Low,  // L - 0.77
    High, // H - 0.44
}

impl AttackComplexity {
    pub fn weight(&self) -> f64 {
        match self {
            AttackComplexity::Low => 0.77,
            AttackComplexity::High => 0.44,
        }
    }
}

impl MetricValue for AttackComplexity {
    const ALLOWED: &'static [&'static str] = &["H", "L"];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(AttackComplexity::Low),
            "H" => Some(AttackComplexity::High),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            AttackComplexity::Low => "L",
            AttackComplexity::High => "H",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivilegesRequired {
    None, // N - 0.85 (unchanged) / 0.85 (changed)
    Low,  // L - 0.62 (unchanged) / 0.68 (changed)
    High, // H - 0.27 (unchanged) / 0.50 (changed)
}

impl PrivilegesRequired {
    /// Weight depends on whether the scope changes
    pub fn weight(&self, scope: Scope) -> f64 {
        match (self, scope) {
            (PrivilegesRequired::None, _) => 0.85,
            (PrivilegesRequired::Low, Scope::Unchanged) => 0.62,
            (PrivilegesRequired::Low, Scope::Changed) => 0.68,
            (PrivilegesRequired::High, Scope::Unchanged) => 0.27,
            (PrivilegesRequired::High, Scope::Changed) => 0.50,
        }
    }
}

impl MetricValue for PrivilegesRequired {
    const ALLOWED: &'static [&'static str] = &["H", "L", "N"];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(PrivilegesRequired::None),
            "L" => Some(PrivilegesRequired::Low),
            "H" => Some(PrivilegesRequired::High),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            PrivilegesRequired::None => "N",
            PrivilegesRequired::Low => "L",
            PrivilegesRequired::High => "H",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserInteraction {
    None,     // N - 0.85
    Required, // R - 0.62
}

impl UserInteraction {
    pub fn weight(&self) -> f64 {
        match self {
            UserInteraction::None => 0.85,
            UserInteraction::Required => 0.62,
        }
    }
}

impl MetricValue for UserInteraction {
    const ALLOWED: &'static [&'static str] = &["N", "R"];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(UserInteraction::None),
            "R" => Some(UserInteraction::Required),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            UserInteraction::None => "N",
            UserInteraction::Required => "R",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Unchanged, // U
    Changed,   // C
}

impl Scope {
    pub fn is_changed(&self) -> bool {
        matches!(self, Scope::Changed)
    }
}

impl MetricValue for Scope {
    const ALLOWED: &'static [&'static str] = &["C", "U"];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(Scope::Unchanged),
            "C" => Some(Scope::Changed),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Scope::Unchanged => "U",
            Scope::Changed => "C",
        }
    }
}

/// Confidentiality, Integrity and Availability impact share one scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    High, // H - 0.56
    Low,  // L - 0.22
    None, // N - 0.0
}

impl Impact {
    pub fn weight(&self) -> f64 {
        match self {
            Impact::High => 0.56,
            Impact::Low => 0.22,
            Impact::None => 0.0,
        }
    }
}

impl MetricValue for Impact {
    const ALLOWED: &'static [&'static str] = &["H", "L", "N"];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "H" => Some(Impact::High),
            "L" => Some(Impact::Low),
            "N" => Some(Impact::None),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "H",
            Impact::Low => "L",
            Impact::None => "N",
        }
    }
}

/// Trim and upper-case a raw metric value
pub fn normalize_value(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn parse_metric<T, M>(metrics: &M, key: &'static str) -> Result<T, CvssError>
where
    T: MetricValue,
    M: MetricLookup + ?Sized,
{
    let raw = metrics
        .metric(key)
        .ok_or(CvssError::MissingMetric { key })?;
    let value = normalize_value(raw);

    T::from_code(&value).ok_or_else(|| CvssError::InvalidMetricValue {
        key,
        value,
        allowed: T::ALLOWED.to_vec(),
    })
}

/// A validated set of the eight CVSS v3.1 base metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricSet {
    // Exploitability Metrics
    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,
    pub scope: Scope,

    // Impact Metrics
    pub confidentiality: Impact,
    pub integrity: Impact,
    pub availability: Impact,
}

impl MetricSet {
    /// Normalize and validate a raw mapping
    ///
    /// Keys are checked in `METRIC_FIELDS` order and the first missing or
    /// illegal one is reported.
    pub fn parse<M: MetricLookup + ?Sized>(metrics: &M) -> Result<Self, CvssError> {
        Ok(Self {
            attack_vector: parse_metric(metrics, "AV")?,
            attack_complexity: parse_metric(metrics, "AC")?,
            privileges_required: parse_metric(metrics, "PR")?,
            user_interaction: parse_metric(metrics, "UI")?,
            scope: parse_metric(metrics, "S")?,
            confidentiality: parse_metric(metrics, "C")?,
            integrity: parse_metric(metrics, "I")?,
            availability: parse_metric(metrics, "A")?,
        })
    }

    /// Metric codes in `METRIC_FIELDS` order
    pub fn codes(&self) -> [(&'static str, &'static str); 8] {
        [
            ("AV", self.attack_vector.as_str()),
            ("AC", self.attack_complexity.as_str()),
            ("PR", self.privileges_required.as_str()),
            ("UI", self.user_interaction.as_str()),
            ("S", self.scope.as_str()),
            ("C", self.confidentiality.as_str()),
            ("I", self.integrity.as_str()),
            ("A", self.availability.as_str()),
        ]
    }

    /// Short `AV:N AC:L ...` form used in listings
    pub fn short_form(&self) -> String {
        self.codes()
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl MetricLookup for MetricSet {
    fn metric(&self, key: &str) -> Option<&str> {
        self.codes()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

impl fmt::Display for MetricSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", VECTOR_PREFIX)?;
        for (key, code) in self.codes() {
            write!(f, "/{}:{}", key, code)?;
        }
        Ok(())
    }
}

impl FromStr for MetricSet {
    type Err = CvssError;

    /// Parse a `CVSS:3.1/AV:N/...` vector string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.trim().split('/');

        match segments.next() {
            Some(prefix) if prefix.eq_ignore_ascii_case(VECTOR_PREFIX) => {}
            _ => {
                return Err(CvssError::InvalidVector {
                    reason: format!("vector must start with '{}'", VECTOR_PREFIX),
                });
            }
        }

        let mut metrics: BTreeMap<&'static str, &str> = BTreeMap::new();
        for segment in segments {
            let (key, value) = segment.split_once(':').ok_or_else(|| CvssError::InvalidVector {
                reason: format!("malformed segment '{}'", segment),
            })?;

            let key = normalize_value(key);
            let field: &'static str = *METRIC_FIELDS
                .iter()
                .find(|f| **f == key)
                .ok_or_else(|| CvssError::InvalidVector {
                    reason: format!("unknown metric '{}'", key),
                })?;

            if metrics.insert(field, value).is_some() {
                return Err(CvssError::InvalidVector {
                    reason: format!("duplicate metric '{}'", field),
                });
            }
        }

        MetricSet::parse(&metrics)
    }
}
