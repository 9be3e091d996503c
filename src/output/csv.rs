// CSV Output Module

use crate::error::RiskMapperError;
use crate::store::Finding;
use csv::Writer;

/// Generate CSV for findings, one row per finding with its metric codes
pub fn generate_findings_csv<'a, I>(findings: I) -> Result<String, RiskMapperError>
where
    I: IntoIterator<Item = &'a Finding>,
{
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record([
        "id", "asset", "title", "score", "severity", "vector", "AV", "AC", "PR", "UI", "S", "C",
        "I", "A",
    ])?;

    for finding in findings {
        let mut row = vec![
            finding.id.to_string(),
            finding.asset_name.clone(),
            finding.title.clone(),
            format!("{:.1}", finding.score),
            finding.severity.to_string(),
            finding.vector.clone(),
        ];
        row.extend(finding.metrics.codes().iter().map(|(_, code)| code.to_string()));
        wtr.write_record(&row)?;
    }

    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?)
}

/// Write CSV to file
pub fn write_csv_file<'a, I>(findings: I, path: &str) -> Result<(), RiskMapperError>
where
    I: IntoIterator<Item = &'a Finding>,
{
    let csv = generate_findings_csv(findings)?;
    std::fs::write(path, csv).map_err(|e| RiskMapperError::FileSystemError {
        path: path.to_string(),
        source: e,
    })?;
    Ok(())
}
