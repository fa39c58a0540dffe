// src/services/persist.rs

//! Record persistence service.

use crate::error::Result;
use crate::models::JobRecord;
use crate::seen::SeenSet;
use crate::store::JobStore;

/// Upserts records into the store and maintains the seen set.
///
/// The URL is marked seen only after the write succeeds; a failed write
/// leaves it unmarked so a future run retries the job instead of silently
/// treating it as done.
pub struct Persister<'a> {
    store: &'a dyn JobStore,
    seen: &'a SeenSet,
}

impl<'a> Persister<'a> {
    pub fn new(store: &'a dyn JobStore, seen: &'a SeenSet) -> Self {
        Self { store, seen }
    }

    /// Upsert one record, marking its URL seen on success.
    pub async fn persist(&self, record: &JobRecord) -> Result<()> {
        self.store.upsert(record).await?;
        self.seen.mark(&record.url);
        log::info!("Saved job: {}", record.url);
        Ok(())
    }
}
