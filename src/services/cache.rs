use std::sync::Arc;
use std::time::Duration;

use crate::models::OpportunityRecord;

const RECORDS_KEY: &str = "records:opportunities";

/// In-process cache of the last loaded record collection
///
/// Entries expire after the configured TTL; the next request then reloads
/// from the record sources.
pub struct RecordCache {
    inner: moka::future::Cache<String, Arc<Vec<OpportunityRecord>>>,
}

impl RecordCache {
    pub fn new(ttl_secs: u64) -> Self {
        let inner = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner }
    }

    pub async fn get(&self) -> Option<Arc<Vec<OpportunityRecord>>> {
        let hit = self.inner.get(RECORDS_KEY).await;
        if hit.is_some() {
            tracing::trace!("Record cache hit");
        }
        hit
    }

    pub async fn insert(&self, records: Arc<Vec<OpportunityRecord>>) {
        self.inner.insert(RECORDS_KEY.to_string(), records).await;
        tracing::trace!("Record cache set");
    }
}
