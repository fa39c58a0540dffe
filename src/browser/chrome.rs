//! Chromium-backed browser session over the Chrome DevTools Protocol.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::browser::BrowserSession;
use crate::error::{AppError, Result};
use crate::models::Config;

/// One Chromium instance with a single page, shared by the whole run.
pub struct ChromeSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    navigation_timeout: Duration,
}

impl ChromeSession {
    /// Launch a Chromium instance per the browser configuration.
    ///
    /// Launch failure is fatal to the run; there is no degraded mode
    /// without a browser.
    pub async fn launch(config: &Config) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.browser.window_width, config.browser.window_height);
        if !config.browser.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &config.browser.executable {
            builder = builder.chrome_executable(path);
        }
        let browser_config = builder.build().map_err(AppError::Browser)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // The CDP event handler must be polled for the connection to stay alive.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser,
            page,
            handler_task,
            navigation_timeout: Duration::from_secs(config.crawler.navigation_timeout_secs),
        })
    }

    /// Close the browser and stop the event handler.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            log::warn!("Browser close failed: {}", e);
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}

#[async_trait]
impl BrowserSession for ChromeSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        let load = async {
            self.page.goto(url).await?;
            self.page.wait_for_navigation().await?;
            Ok::<(), AppError>(())
        };
        tokio::time::timeout(self.navigation_timeout, load)
            .await
            .map_err(|_| AppError::timeout(url, self.navigation_timeout.as_secs()))?
    }

    async fn exists(&self, selector: &str) -> bool {
        self.page.find_element(selector).await.is_ok()
    }

    async fn text(&self, selector: &str) -> Option<String> {
        let element = self.page.find_element(selector).await.ok()?;
        element.inner_text().await.ok().flatten()
    }

    async fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        let element = self.page.find_element(selector).await.ok()?;
        element.attribute(name).await.ok().flatten()
    }

    async fn attributes(&self, selector: &str, name: &str) -> Vec<String> {
        let Ok(elements) = self.page.find_elements(selector).await else {
            return Vec::new();
        };
        let mut values = Vec::new();
        for element in elements {
            if let Ok(Some(value)) = element.attribute(name).await {
                values.push(value);
            }
        }
        values
    }

    async fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        let result = self.page.evaluate(script).await?;
        Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let element = self.page.find_element(selector).await?;
        element.scroll_into_view().await?;
        element.click().await?;
        Ok(())
    }
}
