// src/services/pages.rs

//! Per-seed pagination and crawl driver.
//!
//! Each seed URL is driven through an explicit state machine:
//!
//! ```text
//! Loading -> WaitingForResults -> ScrollExhausting -> Harvesting
//!     -> AdvancingPage -> {WaitingForResults | Done}
//! ```
//!
//! Links on a rendered page are always collected before pagination
//! advances, because the next-page control replaces the current DOM.
//! Extraction runs after pagination is exhausted, from the collected link
//! list, persisting as it goes.

use std::collections::HashSet;
use std::time::Duration;

use url::Url;

use crate::browser::{BrowserSession, wait_for};
use crate::error::{AppError, Result};
use crate::models::{Config, SeedOutcome};
use crate::seen::SeenSet;
use crate::services::{JobExtractor, Persister};
use crate::store::JobStore;
use crate::utils::resolve_url;

/// Pagination state for one seed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageState {
    Loading,
    WaitingForResults,
    ScrollExhausting,
    Harvesting,
    AdvancingPage,
    Done,
}

/// Drives one seed URL through pagination, extraction and persistence.
pub struct PageCrawler<'a> {
    config: &'a Config,
    session: &'a dyn BrowserSession,
    seen: &'a SeenSet,
    extractor: JobExtractor<'a>,
    persister: Persister<'a>,
}

impl<'a> PageCrawler<'a> {
    pub fn new(
        config: &'a Config,
        session: &'a dyn BrowserSession,
        store: &'a dyn JobStore,
        seen: &'a SeenSet,
    ) -> Self {
        Self {
            config,
            session,
            seen,
            extractor: JobExtractor::new(config, session),
            persister: Persister::new(store, seen),
        }
    }

    /// Crawl one seed URL to exhaustion.
    ///
    /// Errors terminate only this seed; the run-level loop logs them and
    /// proceeds to the next seed.
    pub async fn crawl_seed(&self, seed_url: &str) -> Result<SeedOutcome> {
        log::info!("Opening seed: {}", seed_url);
        let mut outcome = SeedOutcome::default();

        let links = self.collect_links(seed_url, &mut outcome).await?;
        self.extract_links(&links, &mut outcome).await;

        log::info!(
            "Seed done: {} ({} pages, {} found, {} skipped, {} saved)",
            seed_url,
            outcome.pages_visited,
            outcome.links_found,
            outcome.links_skipped,
            outcome.jobs_saved
        );
        Ok(outcome)
    }

    /// Run the pagination state machine, collecting unseen job links.
    async fn collect_links(
        &self,
        seed_url: &str,
        outcome: &mut SeedOutcome,
    ) -> Result<Vec<String>> {
        let selectors = &self.config.selectors;
        let base = Url::parse(seed_url)?;

        let mut links = Vec::new();
        let mut collected: HashSet<String> = HashSet::new();
        let mut state = PageState::Loading;

        while state != PageState::Done {
            state = match state {
                PageState::Loading => {
                    self.session
                        .navigate(seed_url)
                        .await
                        .map_err(|e| AppError::crawl(seed_url, e))?;
                    PageState::WaitingForResults
                }

                PageState::WaitingForResults => {
                    let found = wait_for(
                        self.session,
                        &selectors.results_anchor,
                        Duration::from_secs(self.config.crawler.results_timeout_secs),
                        Duration::from_millis(self.config.crawler.poll_interval_ms),
                    )
                    .await;
                    if found {
                        PageState::ScrollExhausting
                    } else {
                        // A timeout means "no results", not "retry".
                        log::info!("No job results on this page: {}", seed_url);
                        PageState::Done
                    }
                }

                PageState::ScrollExhausting => {
                    self.exhaust_scroll().await?;
                    PageState::Harvesting
                }

                PageState::Harvesting => {
                    outcome.pages_visited += 1;
                    let hrefs = self
                        .session
                        .attributes(&selectors.results_anchor, "href")
                        .await;
                    for href in hrefs {
                        let job_url = resolve_url(&base, &href);
                        if !collected.insert(job_url.clone()) {
                            continue;
                        }
                        outcome.links_found += 1;
                        if self.seen.contains(&job_url) {
                            log::debug!("Skipping already scraped job: {}", job_url);
                            outcome.links_skipped += 1;
                        } else {
                            links.push(job_url);
                        }
                    }
                    PageState::AdvancingPage
                }

                PageState::AdvancingPage => {
                    if !self.session.exists(&selectors.next_button).await {
                        log::info!("No next button found, last page reached.");
                        PageState::Done
                    } else {
                        match self.session.click(&selectors.next_button).await {
                            Ok(()) => {
                                tokio::time::sleep(Duration::from_millis(
                                    self.config.crawler.next_settle_ms,
                                ))
                                .await;
                                PageState::WaitingForResults
                            }
                            Err(e) => {
                                // Unclickable next control ends pagination, it is not an error.
                                log::warn!("Error clicking next: {}. Treating as last page.", e);
                                PageState::Done
                            }
                        }
                    }
                }

                PageState::Done => PageState::Done,
            };
        }

        Ok(links)
    }

    /// Visit each collected link, extract and persist as we go.
    ///
    /// A mid-run crash loses at most the in-flight job, never prior
    /// progress. One failed job never aborts the seed.
    async fn extract_links(&self, links: &[String], outcome: &mut SeedOutcome) {
        for job_url in links {
            // Another seed may have persisted this URL in the meantime.
            if self.seen.contains(job_url) {
                log::debug!("Skipping already scraped job: {}", job_url);
                outcome.links_skipped += 1;
                continue;
            }

            let Some(record) = self.extractor.extract(job_url).await else {
                outcome.extract_failures += 1;
                continue;
            };

            match self.persister.persist(&record).await {
                Ok(()) => outcome.jobs_saved += 1,
                Err(e) => {
                    outcome.persist_failures += 1;
                    log::warn!("Error saving job {}: {}", job_url, e);
                }
            }
        }
    }

    /// Scroll to the bottom until the page height stops growing.
    ///
    /// Terminates when two consecutive height measurements are equal, so a
    /// page that never grows exits after one comparison.
    async fn exhaust_scroll(&self) -> Result<()> {
        let settle = Duration::from_millis(self.config.crawler.scroll_settle_ms);
        let mut last = self.page_height().await?;

        loop {
            self.session
                .evaluate("window.scrollTo(0, document.body.scrollHeight);")
                .await?;
            tokio::time::sleep(settle).await;

            let next = self.page_height().await?;
            if next == last {
                break;
            }
            last = next;
        }

        Ok(())
    }

    async fn page_height(&self) -> Result<u64> {
        let value = self
            .session
            .evaluate("document.body.scrollHeight")
            .await?;
        Ok(value.as_u64().unwrap_or(0))
    }
}
