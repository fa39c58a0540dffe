// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod job;
mod seed;
mod selectors;

// Re-export all public types
pub use config::{BrowserConfig, Config, CrawlerConfig};
pub use job::{CrawlOutcome, JobRecord, SeedOutcome};
pub use seed::SeedList;
pub use selectors::{FieldRule, JobField, SelectorProfile};
