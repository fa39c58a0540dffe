// src/browser/mod.rs

//! Browser session abstraction.
//!
//! The crawl pipeline only talks to [`BrowserSession`]; the production
//! implementation drives Chromium over CDP, tests script a mock. Field
//! lookups (`text`, `attribute`, `attributes`, `exists`) deliberately
//! swallow lookup failures and report absence, so a missing element can
//! never abort a page visit. Navigation, script execution and clicks
//! return errors, which callers translate per the failure policy of the
//! component they belong to.

pub mod chrome;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

pub use chrome::ChromeSession;

/// A controllable browser page.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Navigate the session to a URL and wait for the load to finish.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Whether at least one element matches the selector right now.
    async fn exists(&self, selector: &str) -> bool;

    /// Text content of the first matching element, absent on any failure.
    async fn text(&self, selector: &str) -> Option<String>;

    /// Attribute of the first matching element, absent on any failure.
    async fn attribute(&self, selector: &str, name: &str) -> Option<String>;

    /// Attribute values of all matching elements, in DOM order.
    async fn attributes(&self, selector: &str, name: &str) -> Vec<String>;

    /// Execute a script in the page and return its JSON value.
    async fn evaluate(&self, script: &str) -> Result<serde_json::Value>;

    /// Scroll the first matching element into view and click it.
    async fn click(&self, selector: &str) -> Result<()>;
}

/// Poll for a selector until it matches or the timeout expires.
///
/// Returns `true` when the element appeared. A timeout is a policy signal
/// ("no results here"), not an error, so this never fails.
pub async fn wait_for(
    session: &dyn BrowserSession,
    selector: &str,
    timeout: Duration,
    poll_interval: Duration,
) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if session.exists(selector).await {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(poll_interval).await;
    }
}
