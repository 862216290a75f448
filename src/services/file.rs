use csv::ReaderBuilder;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::models::OpportunityRecord;
use crate::services::SourceError;

/// Local CSV dataset whose header row names the record fields
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub async fn fetch_records(&self) -> Result<Vec<OpportunityRecord>, SourceError> {
        tracing::debug!("Reading records from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path).await?;
        parse_records(&raw)
    }
}

/// Parse CSV text into records keyed by the header row.
///
/// Rows shorter than the header only carry the columns they have; rows whose
/// cells are all blank are skipped.
pub fn parse_records(csv: &str) -> Result<Vec<OpportunityRecord>, SourceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv.trim_start_matches('\u{feff}').as_bytes());

    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let fields: Map<String, Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        records.push(OpportunityRecord::from(fields));
    }

    Ok(records)
}
