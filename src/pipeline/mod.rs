//! Pipeline entry point for crawl runs.

pub mod crawl;

pub use crawl::run_crawler;
