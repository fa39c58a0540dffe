// src/seen.rs

//! Set of job URLs already persisted, used for incremental-skip.
//!
//! Seeded from the store's key set at startup and grown as the crawl
//! persists records. Entries are never removed within a run.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::store::JobStore;

/// In-memory set of already-persisted job URLs.
#[derive(Debug, Default)]
pub struct SeenSet {
    inner: Mutex<HashSet<String>>,
}

impl SeenSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the set from the store's key enumeration.
    ///
    /// A store failure here degrades to an empty set so the run can
    /// proceed; already-stored jobs will simply be re-scraped and
    /// overwritten via upsert.
    pub async fn load(store: &dyn JobStore) -> Self {
        match store.list_urls().await {
            Ok(urls) => {
                log::info!("Loaded {} previously scraped jobs from store", urls.len());
                Self {
                    inner: Mutex::new(urls.into_iter().collect()),
                }
            }
            Err(e) => {
                log::warn!("Could not load seen URLs from store: {}. Starting empty.", e);
                Self::new()
            }
        }
    }

    /// Whether a URL has already been persisted.
    pub fn contains(&self, url: &str) -> bool {
        self.inner.lock().expect("seen set lock poisoned").contains(url)
    }

    /// Atomic check-and-insert. Returns `true` if the URL was new.
    pub fn mark(&self, url: &str) -> bool {
        self.inner
            .lock()
            .expect("seen set lock poisoned")
            .insert(url.to_string())
    }

    /// Number of URLs recorded.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("seen set lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
