//! Local filesystem document store.
//!
//! Keeps all job documents in a single `jobs.json` file mapping job URL
//! to record. Writes are read-modify-write under a mutex and land
//! atomically (temp file + rename), so a crash mid-write never corrupts
//! previously persisted jobs.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::models::JobRecord;
use crate::store::JobStore;

const JOBS_FILE: &str = "jobs.json";

/// Local filesystem store backend.
pub struct LocalStore {
    root_dir: PathBuf,
    // Serializes read-modify-write cycles across concurrent writers.
    write_lock: Mutex<()>,
}

impl LocalStore {
    /// Create a new LocalStore rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn jobs_path(&self) -> PathBuf {
        self.root_dir.join(JOBS_FILE)
    }

    /// Read the document map, treating a missing file as empty.
    async fn read_documents(&self) -> Result<BTreeMap<String, JobRecord>> {
        match tokio::fs::read(self.jobs_path()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Write the document map atomically (write to temp, then rename).
    async fn write_documents(&self, documents: &BTreeMap<String, JobRecord>) -> Result<()> {
        let path = self.jobs_path();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(documents)?;
        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl JobStore for LocalStore {
    async fn list_urls(&self) -> Result<Vec<String>> {
        let documents = self.read_documents().await?;
        Ok(documents.into_keys().collect())
    }

    async fn upsert(&self, record: &JobRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_documents().await?;
        documents.insert(record.url.clone(), record.clone());
        self.write_documents(&documents).await
    }
}
