// JSON Output Module

use super::report::RiskReport;
use crate::error::RiskMapperError;
use crate::rating::CvssResult;
use serde::Serialize;

/// Generate JSON output from a risk report
pub fn generate_json(report: &RiskReport, pretty: bool) -> Result<String, RiskMapperError> {
    if pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

/// Write JSON to file
pub fn write_json_file(report: &RiskReport, path: &str, pretty: bool) -> Result<(), RiskMapperError> {
    let json = generate_json(report, pretty)?;
    std::fs::write(path, json).map_err(|e| RiskMapperError::FileSystemError {
        path: path.to_string(),
        source: e,
    })?;
    Ok(())
}

#[derive(Serialize)]
struct CalculationOutput<'a> {
    #[serde(flatten)]
    result: &'a CvssResult,
    vector: &'a str,
}

/// Render a single calculation as `{score, severity, impact, exploitability, vector}`
pub fn calculation_json(
    result: &CvssResult,
    vector: &str,
    pretty: bool,
) -> Result<String, RiskMapperError> {
    let output = CalculationOutput { result, vector };
    if pretty {
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(serde_json::to_string(&output)?)
    }
}
