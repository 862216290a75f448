use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::models::OpportunityRecord;
use crate::services::SourceError;

/// Client for a PostgREST-style table store (e.g. Supabase)
///
/// The opportunity table has been published under several names over time,
/// so every configured name is tried in order and the first table with rows
/// wins.
pub struct RemoteSource {
    base_url: String,
    api_key: String,
    tables: Vec<String>,
    row_limit: usize,
    client: Client,
}

impl RemoteSource {
    pub fn new(
        base_url: String,
        api_key: String,
        tables: Vec<String>,
        row_limit: usize,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            tables,
            row_limit,
            client,
        })
    }

    /// Rows of the first table that has any
    pub async fn fetch_records(&self) -> Result<Vec<OpportunityRecord>, SourceError> {
        for table in &self.tables {
            match self.fetch_table(table).await {
                Ok(records) if !records.is_empty() => return Ok(records),
                Ok(_) => tracing::debug!("Remote table {} is empty", table),
                Err(e) => tracing::debug!("Remote table {} unavailable: {}", table, e),
            }
        }

        Err(SourceError::Empty(format!(
            "no rows in remote tables [{}]",
            self.tables.join(", ")
        )))
    }

    /// Fetch every row of a single table, up to the row limit
    pub async fn fetch_table(&self, table: &str) -> Result<Vec<OpportunityRecord>, SourceError> {
        let url = format!(
            "{}/rest/v1/{}?select=*&limit={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(table),
            self.row_limit
        );

        tracing::debug!("Fetching records from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::ApiError(format!(
                "Failed to fetch table {}: {}",
                table,
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SourceError::InvalidResponse("Expected an array of rows".into()))?;

        let records: Vec<OpportunityRecord> = rows
            .iter()
            .filter_map(|row| row.as_object().cloned().map(OpportunityRecord::from))
            .collect();

        tracing::debug!("Table {} returned {} records", table, records.len());

        Ok(records)
    }
}
