//! Job record data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::selectors::JobField;
use crate::utils::company_from_url;

/// One job posting scraped from a job-detail page.
///
/// The `url` is the stable identity of the posting; every other field is
/// independently optional. Absence of a field is a valid terminal state,
/// never an error for the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobRecord {
    /// Job-detail URL (primary key)
    pub url: String,

    /// Company name, derived from the URL host, never from page content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Posting header text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Absolute URL of the apply control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,

    /// Absolute URL of the company logo image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,

    /// Rendered locations text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,

    /// Rendered time-type text (full time, part time, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_type: Option<String>,

    /// Site-rendered "posted on" free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_on: Option<String>,

    /// Requisition identifier text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_requisition_id: Option<String>,

    /// "Time left to apply" free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// `datePosted` from the page's JSON-LD block, independent of `posted_on`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl JobRecord {
    /// Create an empty record for a job URL.
    ///
    /// `company_name` is filled immediately from the URL host, so it is
    /// immune to page-rendering failures.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let company_name = company_from_url(&url);
        Self {
            url,
            company_name,
            description: None,
            apply_link: None,
            company_logo: None,
            locations: None,
            time_type: None,
            posted_on: None,
            job_requisition_id: None,
            end_date: None,
            created_at: None,
        }
    }

    /// Store a probed field value. Empty strings are treated as absent.
    pub fn set_field(&mut self, field: JobField, value: String) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let value = Some(value.to_string());
        match field {
            JobField::Description => self.description = value,
            JobField::ApplyLink => self.apply_link = value,
            JobField::CompanyLogo => self.company_logo = value,
            JobField::Locations => self.locations = value,
            JobField::TimeType => self.time_type = value,
            JobField::PostedOn => self.posted_on = value,
            JobField::JobRequisitionId => self.job_requisition_id = value,
            JobField::EndDate => self.end_date = value,
        }
    }
}

/// Statistics for one seed URL's traversal.
#[derive(Debug, Clone, Default)]
pub struct SeedOutcome {
    /// Result pages rendered for this seed
    pub pages_visited: usize,
    /// Job links discovered across all pages
    pub links_found: usize,
    /// Links skipped because they were already persisted
    pub links_skipped: usize,
    /// Records extracted and saved
    pub jobs_saved: usize,
    /// Job page visits that failed outright
    pub extract_failures: usize,
    /// Store writes that failed
    pub persist_failures: usize,
}

/// Summary of a whole crawl run.
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    pub seeds_total: usize,
    pub seeds_failed: usize,
    pub pages_visited: usize,
    pub links_found: usize,
    pub links_skipped: usize,
    pub jobs_saved: usize,
    pub extract_failures: usize,
    pub persist_failures: usize,
}

impl CrawlOutcome {
    /// Fold one seed's statistics into the run summary.
    pub fn absorb(&mut self, seed: &SeedOutcome) {
        self.pages_visited += seed.pages_visited;
        self.links_found += seed.links_found;
        self.links_skipped += seed.links_skipped;
        self.jobs_saved += seed.jobs_saved;
        self.extract_failures += seed.extract_failures;
        self.persist_failures += seed.persist_failures;
    }
}
