// src/services/mod.rs

//! Crawl services.
//!
//! - `PageCrawler`: drives one seed URL through pagination and extraction
//! - `JobExtractor`: turns one job-detail page into a `JobRecord`
//! - `Persister`: upserts records and maintains the seen set

mod extract;
mod pages;
mod persist;

pub use extract::JobExtractor;
pub use pages::PageCrawler;
pub use persist::Persister;
