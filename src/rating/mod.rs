// Rating module - CVSS v3.1 base metrics, scoring and severity bands

pub mod cvss;
pub mod metrics;
pub mod severity;

pub use cvss::{
    CvssCalculator, CvssResult, calculate_base_score, round_up_1_decimal, validate_metrics,
    vector_string,
};
pub use metrics::{METRIC_FIELDS, MetricLookup, MetricSet};
pub use severity::Severity;
