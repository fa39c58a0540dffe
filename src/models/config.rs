//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::selectors::SelectorProfile;
use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Browser launch settings
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Crawl timing and wait behavior
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Site-template selectors
    #[serde(default)]
    pub selectors: SelectorProfile,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.results_timeout_secs == 0 {
            return Err(AppError::validation(
                "crawler.results_timeout_secs must be > 0",
            ));
        }
        if self.crawler.poll_interval_ms == 0 {
            return Err(AppError::validation("crawler.poll_interval_ms must be > 0"));
        }
        if self.crawler.navigation_timeout_secs == 0 {
            return Err(AppError::validation(
                "crawler.navigation_timeout_secs must be > 0",
            ));
        }
        if self.selectors.results_anchor.trim().is_empty() {
            return Err(AppError::validation("selectors.results_anchor is empty"));
        }
        if self.selectors.next_button.trim().is_empty() {
            return Err(AppError::validation("selectors.next_button is empty"));
        }
        if self.selectors.fields.is_empty() {
            return Err(AppError::validation("selectors.fields is empty"));
        }
        if self.browser.window_width == 0 || self.browser.window_height == 0 {
            return Err(AppError::validation("browser window size must be > 0"));
        }
        Ok(())
    }
}

/// Browser launch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Viewport width in pixels
    #[serde(default = "defaults::window_width")]
    pub window_width: u32,

    /// Viewport height in pixels
    #[serde(default = "defaults::window_height")]
    pub window_height: u32,

    /// Run without a visible window
    #[serde(default = "defaults::headless")]
    pub headless: bool,

    /// Explicit browser executable path, autodetected when unset
    #[serde(default)]
    pub executable: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            window_width: defaults::window_width(),
            window_height: defaults::window_height(),
            headless: defaults::headless(),
            executable: None,
        }
    }
}

/// Crawl timing and wait behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Bounded wait for the first result anchor on a listing page, seconds
    #[serde(default = "defaults::results_timeout")]
    pub results_timeout_secs: u64,

    /// Poll interval while waiting for result anchors, milliseconds
    #[serde(default = "defaults::poll_interval")]
    pub poll_interval_ms: u64,

    /// Settle delay after navigating to a job-detail page, milliseconds
    #[serde(default = "defaults::settle_delay")]
    pub settle_delay_ms: u64,

    /// Settle delay between scroll trigger and height re-measurement, milliseconds
    #[serde(default = "defaults::scroll_settle")]
    pub scroll_settle_ms: u64,

    /// Settle delay after clicking the next-page control, milliseconds
    #[serde(default = "defaults::next_settle")]
    pub next_settle_ms: u64,

    /// Bounded wait for a page navigation to complete, seconds
    #[serde(default = "defaults::navigation_timeout")]
    pub navigation_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            results_timeout_secs: defaults::results_timeout(),
            poll_interval_ms: defaults::poll_interval(),
            settle_delay_ms: defaults::settle_delay(),
            scroll_settle_ms: defaults::scroll_settle(),
            next_settle_ms: defaults::next_settle(),
            navigation_timeout_secs: defaults::navigation_timeout(),
        }
    }
}

mod defaults {
    // Browser defaults
    pub fn window_width() -> u32 {
        1600
    }
    pub fn window_height() -> u32 {
        1000
    }
    pub fn headless() -> bool {
        true
    }

    // Crawler defaults
    pub fn results_timeout() -> u64 {
        8
    }
    pub fn poll_interval() -> u64 {
        250
    }
    pub fn settle_delay() -> u64 {
        2000
    }
    pub fn scroll_settle() -> u64 {
        2000
    }
    pub fn next_settle() -> u64 {
        3000
    }
    pub fn navigation_timeout() -> u64 {
        30
    }
}
