// src/services/extract.rs

//! Job-detail page extraction service.
//!
//! Runs a fixed ordered set of independently-optional field probes against
//! a rendered job page. A failed probe leaves its field absent and never
//! affects the other probes or the record; only a failed navigation
//! discards the record entirely.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::browser::BrowserSession;
use crate::models::{Config, JobRecord};

/// Service for extracting a structured record from one job-detail page.
pub struct JobExtractor<'a> {
    config: &'a Config,
    session: &'a dyn BrowserSession,
}

impl<'a> JobExtractor<'a> {
    /// Create a new extractor over an open browser session.
    pub fn new(config: &'a Config, session: &'a dyn BrowserSession) -> Self {
        Self { config, session }
    }

    /// Visit a job-detail page and extract a record.
    ///
    /// Returns `None` when navigation fails; the caller must then leave the
    /// URL out of the seen set so a future run can retry it.
    pub async fn extract(&self, job_url: &str) -> Option<JobRecord> {
        if let Err(e) = self.session.navigate(job_url).await {
            log::warn!("Error opening job page {}: {}", job_url, e);
            return None;
        }

        // Client-side rendering settle.
        tokio::time::sleep(Duration::from_millis(self.config.crawler.settle_delay_ms)).await;

        let mut record = JobRecord::new(job_url);

        for rule in &self.config.selectors.fields {
            let value = match &rule.attr {
                Some(attr) => self.session.attribute(&rule.selector, attr).await,
                None => self.session.text(&rule.selector).await,
            };
            match value {
                Some(value) => record.set_field(rule.field, value),
                None => log::debug!("No value for {:?} on {}", rule.field, job_url),
            }
        }

        record.created_at = self.probe_date_posted(job_url).await;

        log::info!(
            "Scraped: {} | Company: {}",
            record.description.as_deref().unwrap_or("<no title>"),
            record.company_name.as_deref().unwrap_or("<unknown>")
        );

        Some(record)
    }

    /// Probe the page's JSON-LD metadata block for `datePosted`.
    ///
    /// Any lookup or parse failure leaves `created_at` absent without
    /// touching the already-collected fields.
    async fn probe_date_posted(&self, job_url: &str) -> Option<DateTime<Utc>> {
        let selector = self.config.selectors.metadata_script.replace('\'', "\\'");
        let script = format!(
            "(() => {{ const s = document.querySelector('{selector}'); return s ? s.textContent : null; }})()"
        );

        let value = match self.session.evaluate(&script).await {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Metadata probe failed on {}: {}", job_url, e);
                return None;
            }
        };

        let raw = value.as_str()?;
        let metadata: serde_json::Value = serde_json::from_str(raw).ok()?;
        let date_posted = metadata.get("datePosted")?.as_str()?;
        parse_date_posted(date_posted)
    }
}

/// Parse a JSON-LD `datePosted` value, full timestamp or plain date.
fn parse_date_posted(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}
