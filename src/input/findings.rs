// Finding import - CSV and JSON rows carrying asset, title and base metrics
//
// CSV header: asset,title,AV,AC,PR,UI,S,C,I,A (comma or semicolon delimited)
// JSON: a list of objects with the same keys

use crate::error::RiskMapperError;
use crate::rating::{METRIC_FIELDS, MetricLookup};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Import file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(ImportFormat::Csv),
            "json" => Some(ImportFormat::Json),
            _ => None,
        }
    }
}

/// One imported row before scoring
///
/// Metric values are trimmed and upper-cased; a key is absent when the
/// source row had no such column or field. Asset and title are trimmed
/// and stay empty when blank, the register fills in its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub asset: String,
    pub title: String,
    pub metrics: BTreeMap<String, String>,
}

impl MetricLookup for ImportRecord {
    fn metric(&self, key: &str) -> Option<&str> {
        self.metrics.metric(key)
    }
}

fn clean(value: &str) -> String {
    value.trim().to_string()
}

fn build_record(mut get: impl FnMut(&str) -> Option<String>) -> ImportRecord {
    let asset = get("asset").map(|s| clean(&s)).unwrap_or_default();
    let title = get("title").map(|s| clean(&s)).unwrap_or_default();

    let metrics = METRIC_FIELDS
        .iter()
        .filter_map(|&key| get(key).map(|v| (key.to_string(), clean(&v).to_uppercase())))
        .collect();

    ImportRecord {
        asset,
        title,
        metrics,
    }
}

/// Pick `;` when the header leans on semicolons, `,` otherwise
fn detect_delimiter(header: &str) -> u8 {
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > 0 && semicolons >= commas {
        b';'
    } else {
        b','
    }
}

/// Parse CSV text with a header row
pub fn parse_csv_text(csv_text: &str) -> Result<Vec<ImportRecord>, RiskMapperError> {
    let Some(header) = csv_text.lines().find(|l| !l.trim().is_empty()) else {
        return Ok(Vec::new());
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(detect_delimiter(header))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    // Column index per lower-cased header name
    let columns: BTreeMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_lowercase(), i))
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        records.push(build_record(|key| {
            columns
                .get(&key.to_lowercase())
                .and_then(|&i| row.get(i))
                .map(str::to_string)
        }));
    }

    Ok(records)
}

fn json_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a JSON list of objects; non-object elements are skipped
pub fn parse_json_text(json_text: &str) -> Result<Vec<ImportRecord>, RiskMapperError> {
    let data: Value = serde_json::from_str(json_text)?;
    let Value::Array(items) = data else {
        crate::invalid_input!("JSON must be a list of objects.");
    };

    Ok(items
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| build_record(|key| obj.get(key).and_then(json_scalar)))
        .collect())
}

/// Parse text in the given format
pub fn parse_text(text: &str, format: ImportFormat) -> Result<Vec<ImportRecord>, RiskMapperError> {
    match format {
        ImportFormat::Csv => parse_csv_text(text),
        ImportFormat::Json => parse_json_text(text),
    }
}

/// Read and parse an import file, detecting the format from its extension
/// unless one is given
pub fn load_file(
    path: &Path,
    format: Option<ImportFormat>,
) -> Result<Vec<ImportRecord>, RiskMapperError> {
    let format = match format.or_else(|| ImportFormat::from_path(path)) {
        Some(format) => format,
        None => {
            return Err(RiskMapperError::UnknownFormat {
                path: path.display().to_string(),
            });
        }
    };

    let bytes = std::fs::read(path).map_err(|e| RiskMapperError::FileSystemError {
        path: path.display().to_string(),
        source: e,
    })?;
    let text = String::from_utf8(bytes)?;

    parse_text(&text, format)
}
