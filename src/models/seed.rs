//! Seed URL input.
//!
//! Seeds come from a tabular CSV file with a `Link` column, read once at
//! startup. Duplicate and empty values are dropped; order is preserved.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{AppError, Result};

/// Deduplicated, ordered list of seed URLs.
#[derive(Debug, Clone, Default)]
pub struct SeedList {
    urls: Vec<String>,
}

impl SeedList {
    /// Read seed links from a CSV file with a `Link` column.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?.clone();
        let link_idx = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case("link"))
            .ok_or_else(|| {
                AppError::config(format!(
                    "Seed file {:?} has no 'Link' column",
                    path.as_ref()
                ))
            })?;

        let mut seen = HashSet::new();
        let mut urls = Vec::new();
        for record in reader.records() {
            let record = record?;
            let Some(value) = record.get(link_idx) else {
                continue;
            };
            let value = value.trim();
            if !value.is_empty() && seen.insert(value.to_string()) {
                urls.push(value.to_string());
            }
        }

        Ok(Self { urls })
    }

    /// Build a seed list directly from URLs (dropping duplicates/empties).
    pub fn from_urls(urls: impl IntoIterator<Item = String>) -> Self {
        let mut seen = HashSet::new();
        let urls = urls
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty() && seen.insert(u.clone()))
            .collect();
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Validate that at least one seed is present.
    pub fn validate(&self) -> Result<()> {
        if self.urls.is_empty() {
            return Err(AppError::validation("No seed links in input file"));
        }
        Ok(())
    }
}
