use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::Settings;
use crate::models::OpportunityRecord;
use crate::services::{FileSource, RecordCache, RemoteSource};

/// Errors that can occur while loading opportunity records
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Failed to read dataset: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("No records found: {0}")]
    Empty(String),

    #[error("No companies dataset found (remote/CSV)")]
    Unavailable,
}

/// A place opportunity records can be loaded from
pub enum RecordSource {
    Remote(RemoteSource),
    File(FileSource),
}

impl RecordSource {
    pub fn name(&self) -> &'static str {
        match self {
            RecordSource::Remote(_) => "remote",
            RecordSource::File(_) => "file",
        }
    }

    pub async fn fetch_records(&self) -> Result<Vec<OpportunityRecord>, SourceError> {
        match self {
            RecordSource::Remote(remote) => remote.fetch_records().await,
            RecordSource::File(file) => file.fetch_records().await,
        }
    }
}

/// Loads records from the first source that has any
///
/// Sources are tried once each, in order, per load. A source that fails or
/// comes back empty is logged and skipped; only when every source has been
/// exhausted does the provider report [`SourceError::Unavailable`].
pub struct RecordProvider {
    sources: Vec<RecordSource>,
    cache: Option<RecordCache>,
}

impl RecordProvider {
    pub fn new(sources: Vec<RecordSource>) -> Self {
        Self { sources, cache: None }
    }

    pub fn with_cache(mut self, cache: RecordCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Remote store (when configured) first, then the CSV file
    pub fn from_settings(settings: &Settings) -> Result<Self, SourceError> {
        let mut sources = Vec::with_capacity(2);

        let remote = &settings.remote;
        if remote.is_configured() {
            sources.push(RecordSource::Remote(RemoteSource::new(
                remote.url.clone(),
                remote.api_key.clone(),
                remote.tables.clone(),
                remote.row_limit,
                Duration::from_secs(remote.timeout_secs),
            )?));
        }
        sources.push(RecordSource::File(FileSource::new(&settings.file.path)));

        let provider = Self::new(sources);
        Ok(match settings.cache.ttl_secs {
            Some(ttl) if ttl > 0 => provider.with_cache(RecordCache::new(ttl)),
            _ => provider,
        })
    }

    pub fn remote_configured(&self) -> bool {
        self.sources
            .iter()
            .any(|source| matches!(source, RecordSource::Remote(_)))
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Fetch the current record collection
    pub async fn fetch_records(&self) -> Result<Arc<Vec<OpportunityRecord>>, SourceError> {
        if let Some(cache) = &self.cache {
            if let Some(records) = cache.get().await {
                return Ok(records);
            }
        }

        let records = Arc::new(self.load().await?);

        if let Some(cache) = &self.cache {
            cache.insert(records.clone()).await;
        }

        Ok(records)
    }

    async fn load(&self) -> Result<Vec<OpportunityRecord>, SourceError> {
        for source in &self.sources {
            match source.fetch_records().await {
                Ok(records) if !records.is_empty() => {
                    tracing::debug!("Loaded {} records from {} source", records.len(), source.name());
                    return Ok(records);
                }
                Ok(_) => {
                    tracing::warn!("{} source returned no records", source.name());
                }
                Err(e) => {
                    tracing::warn!("{} source failed: {}", source.name(), e);
                }
            }
        }

        Err(SourceError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let provider = RecordProvider::new(vec![RecordSource::File(FileSource::new("/nonexistent/Companies.csv"))]);

        let err = provider.fetch_records().await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable));
        assert_eq!(err.to_string(), "No companies dataset found (remote/CSV)");
    }

    #[tokio::test]
    async fn test_header_only_file_is_unavailable() {
        let file = csv_file("Company,Role\n");
        let provider = RecordProvider::new(vec![RecordSource::File(FileSource::new(file.path()))]);

        assert!(matches!(provider.fetch_records().await, Err(SourceError::Unavailable)));
    }

    #[tokio::test]
    async fn test_first_non_empty_source_wins() {
        let empty = csv_file("Company,Role\n");
        let full = csv_file("Company,Role\nAcme,Intern\n");
        let provider = RecordProvider::new(vec![
            RecordSource::File(FileSource::new("/nonexistent.csv")),
            RecordSource::File(FileSource::new(empty.path())),
            RecordSource::File(FileSource::new(full.path())),
        ]);

        let records = provider.fetch_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(!provider.remote_configured());
    }

    #[tokio::test]
    async fn test_cache_serves_previous_load() {
        let file = csv_file("Company,Role\nAcme,Intern\n");
        let path = file.path().to_path_buf();
        let provider = RecordProvider::new(vec![RecordSource::File(FileSource::new(&path))])
            .with_cache(RecordCache::new(60));

        let first = provider.fetch_records().await.unwrap();
        drop(file);
        let second = provider.fetch_records().await.unwrap();

        assert!(provider.is_cached());
        assert!(!path.exists());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_from_settings_without_remote() {
        let settings = Settings::default();
        let provider = RecordProvider::from_settings(&settings).unwrap();

        assert!(!provider.remote_configured());
        assert!(!provider.is_cached());
    }
}
