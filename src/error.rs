// Error types for RiskMapper
//
// CvssError covers the scoring engine and is what callers match on when a
// metric row is rejected. RiskMapperError wraps it together with the I/O and
// format failures of the import, config and export paths.

use std::io;
use thiserror::Error;

/// Errors raised while validating or parsing CVSS v3.1 base metrics
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvssError {
    /// One of the eight required base metrics is absent
    #[error("Missing metric: {key}")]
    MissingMetric { key: &'static str },

    /// A metric is present but its normalized value is not a legal code
    #[error("Invalid {key}: '{value}'. Allowed: {allowed:?}")]
    InvalidMetricValue {
        key: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// A vector string is structurally malformed
    #[error("Invalid CVSS vector: {reason}")]
    InvalidVector { reason: String },
}

impl CvssError {
    /// Metric key the error refers to, if any
    pub fn key(&self) -> Option<&'static str> {
        match self {
            CvssError::MissingMetric { key } | CvssError::InvalidMetricValue { key, .. } => {
                Some(*key)
            }
            CvssError::InvalidVector { .. } => None,
        }
    }
}

/// Main error type for RiskMapper collaborators
#[derive(Debug, Error)]
pub enum RiskMapperError {
    /// Metric validation failed
    #[error(transparent)]
    Cvss(#[from] CvssError),

    /// Invalid input from user or configuration
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Unsupported or undetectable import format
    #[error("Unsupported import format for {path}: expected .csv or .json")]
    UnknownFormat { path: String },

    /// File system errors
    #[error("File system error: {path}: {source}")]
    FileSystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Generic I/O error
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: io::Error,
    },

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// TOML configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] toml::de::Error),

    /// TOML configuration could not be rendered
    #[error("Configuration serialization error: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),

    /// UTF-8 conversion errors
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

impl<W> From<csv::IntoInnerError<W>> for RiskMapperError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        RiskMapperError::IoError {
            source: err.into_error(),
        }
    }
}

/// Helper macro for returning an invalid-input error
#[macro_export]
macro_rules! invalid_input {
    ($msg:literal $(,)?) => {
        return Err($crate::error::RiskMapperError::InvalidInput {
            message: $msg.to_string(),
        }
        .into())
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::RiskMapperError::InvalidInput {
            message: format!($fmt, $($arg)*),
        }
        .into())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_metric_message() {
        let err = CvssError::MissingMetric { key: "PR" };
        assert_eq!(err.to_string(), "Missing metric: PR");
        assert_eq!(err.key(), Some("PR"));
    }

    #[test]
    fn test_invalid_value_message_lists_allowed() {
        let err = CvssError::InvalidMetricValue {
            key: "AV",
            value: "Z".to_string(),
            allowed: vec!["A", "L", "N", "P"],
        };

        let msg = err.to_string();
        assert!(msg.contains("Invalid AV"));
        assert!(msg.contains("'Z'"));
        assert!(msg.contains(r#"["A", "L", "N", "P"]"#));
    }

    #[test]
    fn test_vector_error_has_no_key() {
        let err = CvssError::InvalidVector {
            reason: "bad prefix".to_string(),
        };
        assert_eq!(err.key(), None);
    }

    #[test]
    fn test_cvss_error_is_transparent_when_wrapped() {
        let err: RiskMapperError = CvssError::MissingMetric { key: "S" }.into();
        assert_eq!(err.to_string(), "Missing metric: S");
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: RiskMapperError = io_err.into();
        assert!(matches!(err, RiskMapperError::IoError { .. }));
    }
}
