// src/lib.rs

//! wdcrawl: Workday career-site job crawler library

pub mod browser;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod seen;
pub mod services;
pub mod store;
pub mod utils;
