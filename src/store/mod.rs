//! Document store abstraction for job persistence.
//!
//! A store holds one document per job URL and supports key-set
//! enumeration (to seed the SeenSet) and upsert-by-key (so re-crawling
//! an already-stored job overwrites its fields instead of duplicating).

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::JobRecord;

// Re-export for convenience
pub use local::LocalStore;

/// Trait for job document store backends.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Enumerate the `url` keys of all stored documents.
    async fn list_urls(&self) -> Result<Vec<String>>;

    /// Insert or overwrite the document keyed by `record.url`.
    async fn upsert(&self, record: &JobRecord) -> Result<()>;
}
