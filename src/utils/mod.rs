//! Utility functions and helpers.

pub mod url;

pub use url::{company_from_url, resolve_url};
