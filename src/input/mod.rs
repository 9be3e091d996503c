// Input module - finding import and the batch import pipeline

pub mod findings;

pub use findings::{ImportFormat, ImportRecord, load_file, parse_csv_text, parse_json_text};

use crate::error::CvssError;
use crate::store::RiskRegister;
use serde::Serialize;
use tracing::{info, warn};

/// A row that failed validation and was skipped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFailure {
    /// 1-based position of the record in its batch
    pub row: usize,
    pub asset: String,
    pub title: String,
    pub error: String,
    #[serde(skip)]
    pub cause: CvssError,
}

/// Outcome of one import batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub failures: Vec<RowFailure>,
}

impl ImportSummary {
    /// Fold another batch into this one
    pub fn merge(&mut self, other: ImportSummary) {
        self.imported += other.imported;
        self.skipped += other.skipped;
        self.failures.extend(other.failures);
    }
}

/// Score and record each row, skipping rows whose metrics do not validate
///
/// A bad row never aborts the batch; it is counted and reported in the
/// summary.
pub fn import_records(register: &mut RiskRegister, records: &[ImportRecord]) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for (i, record) in records.iter().enumerate() {
        match register.add_finding(&record.asset, &record.title, record) {
            Ok(_) => summary.imported += 1,
            Err(e) => {
                warn!("Skipping row {} ('{}' on '{}'): {}", i + 1, record.title, record.asset, e);
                summary.skipped += 1;
                summary.failures.push(RowFailure {
                    row: i + 1,
                    asset: record.asset.clone(),
                    title: record.title.clone(),
                    error: e.to_string(),
                    cause: e,
                });
            }
        }
    }

    info!(
        "Import complete: {} added, {} skipped",
        summary.imported, summary.skipped
    );
    summary
}
