// src/pipeline/crawl.rs

//! Job crawling pipeline.

use chrono::Utc;

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::models::{Config, CrawlOutcome, SeedList};
use crate::seen::SeenSet;
use crate::services::PageCrawler;
use crate::store::JobStore;

/// Run the crawler over all seed URLs.
///
/// Seeds are processed sequentially; a failed seed is logged and the run
/// proceeds to the next one. All durable progress is committed through the
/// store as the crawl goes, so the outcome is purely informational.
pub async fn run_crawler(
    config: &Config,
    session: &dyn BrowserSession,
    store: &dyn JobStore,
    seeds: &SeedList,
) -> Result<CrawlOutcome> {
    let start_time = Utc::now();
    log::info!("Crawling {} seed link(s)", seeds.len());

    let seen = SeenSet::load(store).await;
    let crawler = PageCrawler::new(config, session, store, &seen);

    let mut outcome = CrawlOutcome {
        seeds_total: seeds.len(),
        ..CrawlOutcome::default()
    };

    for seed_url in seeds.urls() {
        match crawler.crawl_seed(seed_url).await {
            Ok(seed_outcome) => outcome.absorb(&seed_outcome),
            Err(e) => {
                outcome.seeds_failed += 1;
                log::warn!("Seed failed {}: {}", seed_url, e);
            }
        }
    }

    let elapsed = Utc::now().signed_duration_since(start_time);
    log::info!(
        "Crawl complete in {}s: {} seeds ({} failed), {} pages, {} links, {} skipped, {} saved, {} extract failures, {} persist failures",
        elapsed.num_seconds(),
        outcome.seeds_total,
        outcome.seeds_failed,
        outcome.pages_visited,
        outcome.links_found,
        outcome.links_skipped,
        outcome.jobs_saved,
        outcome.extract_failures,
        outcome.persist_failures
    );

    Ok(outcome)
}
