//! Scripted mock browser session for integration tests.
//!
//! Pages are keyed by URL; each page scripts what the selectors resolve
//! to, the successive scroll-height measurements, the JSON-LD block, and
//! where the next-page control leads.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use wdcrawl::browser::BrowserSession;
use wdcrawl::error::{AppError, Result};

/// Default selectors from `SelectorProfile`, repeated here for scripting.
pub const RESULTS: &str = "a[data-automation-id=jobTitle]";
pub const NEXT: &str = "button[aria-label=next]";

#[derive(Debug, Default, Clone)]
pub struct MockPage {
    /// selector -> text content
    pub texts: HashMap<String, String>,
    /// (selector, attr) -> single value
    pub attrs: HashMap<(String, String), String>,
    /// (selector, attr) -> values of all matches
    pub lists: HashMap<(String, String), Vec<String>>,
    /// Successive scroll-height measurements; the last repeats forever
    pub heights: Vec<u64>,
    /// JSON-LD block text content
    pub ld_json: Option<String>,
    /// Where clicking the next control navigates; `None` means no control
    pub next_target: Option<String>,
    /// Simulate a navigation failure for this URL
    pub fail_navigation: bool,
}

impl MockPage {
    pub fn listing(hrefs: &[&str]) -> Self {
        let mut page = Self {
            heights: vec![1000, 1000],
            ..Self::default()
        };
        page.lists.insert(
            (RESULTS.to_string(), "href".to_string()),
            hrefs.iter().map(|s| s.to_string()).collect(),
        );
        page
    }

    pub fn with_next(mut self, target: &str) -> Self {
        self.next_target = Some(target.to_string());
        self
    }

    pub fn with_heights(mut self, heights: &[u64]) -> Self {
        self.heights = heights.to_vec();
        self
    }

    pub fn job(title: &str) -> Self {
        let mut page = Self::default();
        page.texts.insert(
            "h2[data-automation-id=jobPostingHeader]".to_string(),
            title.to_string(),
        );
        page.texts.insert(
            "div[data-automation-id=locations] dd".to_string(),
            "Cape Town".to_string(),
        );
        page.texts.insert(
            "div[data-automation-id=time] dd".to_string(),
            "Full time".to_string(),
        );
        page.texts.insert(
            "div[data-automation-id=postedOn] dd".to_string(),
            "Posted Yesterday".to_string(),
        );
        page.attrs.insert(
            (
                "a[data-automation-id=adventureButton]".to_string(),
                "href".to_string(),
            ),
            "https://acme.example.com/apply".to_string(),
        );
        page
    }

    pub fn without_text(mut self, selector: &str) -> Self {
        self.texts.remove(selector);
        self
    }

    pub fn with_ld_json(mut self, raw: &str) -> Self {
        self.ld_json = Some(raw.to_string());
        self
    }

    pub fn failing() -> Self {
        Self {
            fail_navigation: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    pages: HashMap<String, MockPage>,
    current: String,
    navigations: Vec<String>,
    /// URL -> consumed height measurements
    height_cursor: HashMap<String, usize>,
    /// URL -> height measurements taken
    measurements: HashMap<String, usize>,
}

#[derive(Debug, Default)]
pub struct MockSession {
    inner: Mutex<Inner>,
}

impl MockSession {
    pub fn new(pages: Vec<(&str, MockPage)>) -> Self {
        let inner = Inner {
            pages: pages
                .into_iter()
                .map(|(url, page)| (url.to_string(), page))
                .collect(),
            ..Inner::default()
        };
        Self {
            inner: Mutex::new(inner),
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.inner.lock().unwrap().navigations.clone()
    }

    pub fn measurements(&self, url: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .measurements
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    fn current_page(inner: &Inner) -> Option<&MockPage> {
        inner.pages.get(&inner.current)
    }
}

#[async_trait]
impl BrowserSession for MockSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.navigations.push(url.to_string());
        if let Some(page) = inner.pages.get(url) {
            if page.fail_navigation {
                return Err(AppError::browser(format!("net::ERR_FAILED {url}")));
            }
        }
        inner.current = url.to_string();
        Ok(())
    }

    async fn exists(&self, selector: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        let Some(page) = Self::current_page(&inner) else {
            return false;
        };
        if selector == NEXT {
            return page.next_target.is_some();
        }
        page.texts.contains_key(selector)
            || page
                .lists
                .iter()
                .any(|((sel, _), values)| sel == selector && !values.is_empty())
    }

    async fn text(&self, selector: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        Self::current_page(&inner)?.texts.get(selector).cloned()
    }

    async fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        Self::current_page(&inner)?
            .attrs
            .get(&(selector.to_string(), name.to_string()))
            .cloned()
    }

    async fn attributes(&self, selector: &str, name: &str) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        Self::current_page(&inner)
            .and_then(|page| {
                page.lists
                    .get(&(selector.to_string(), name.to_string()))
                    .cloned()
            })
            .unwrap_or_default()
    }

    async fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        let mut inner = self.inner.lock().unwrap();
        let current = inner.current.clone();

        // Scroll trigger comes before the height probe: both mention
        // scrollHeight, only the trigger mentions scrollTo.
        if script.contains("scrollTo") {
            return Ok(serde_json::Value::Null);
        }

        if script.contains("scrollHeight") {
            let cursor = *inner.height_cursor.get(&current).unwrap_or(&0);
            let height = inner
                .pages
                .get(&current)
                .and_then(|page| {
                    page.heights
                        .get(cursor)
                        .or_else(|| page.heights.last())
                        .copied()
                })
                .unwrap_or(0);
            inner.height_cursor.insert(current.clone(), cursor + 1);
            *inner.measurements.entry(current).or_insert(0) += 1;
            return Ok(serde_json::json!(height));
        }

        if script.contains("ld+json") {
            let value = inner
                .pages
                .get(&current)
                .and_then(|page| page.ld_json.clone())
                .map(serde_json::Value::String)
                .unwrap_or(serde_json::Value::Null);
            return Ok(value);
        }

        Ok(serde_json::Value::Null)
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if selector != NEXT {
            return Err(AppError::browser(format!("no such element: {selector}")));
        }
        let target = Self::current_page(&inner).and_then(|page| page.next_target.clone());
        match target {
            Some(url) => {
                inner.current = url;
                Ok(())
            }
            None => Err(AppError::browser("element not interactable")),
        }
    }
}
