use crate::browser::{Browser, PageDriver};
use crate::error::{Result, WalkError};
use crate::result::{ClickableElement, ScrapedData};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::Duration;
use tracing::{debug, warn};

const TEXT_SNIPPET: &str = "document.body.innerText";

const IMAGES_SNIPPET: &str = "Array.from(document.images, img => img.src)";

const CLICKABLES_SNIPPET: &str = r#"
    () => Array.from(document.querySelectorAll('button, a'), el => ({
        text: el.innerText.trim(),
        href: el.href || null,
        selector: el.tagName + (el.id ? '#' + el.id : '') +
                  (el.className ? '.' + el.className.split(' ').join('.') : '')
    }))
"#;

/// Headless Chrome session over the Chrome DevTools Protocol.
pub struct CdpSession {
    browser: CdpBrowser,
    handler_task: tokio::task::JoinHandle<()>,
}

impl CdpSession {
    pub async fn launch(headless: bool) -> Result<Self> {
        let mut builder = BrowserConfig::builder();
        if !headless {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(WalkError::Browser)?;

        let (browser, mut handler) = CdpBrowser::launch(config)
            .await
            .map_err(|e| WalkError::Browser(e.to_string()))?;

        // The handler stream must be polled for the CDP connection to make
        // progress; it runs until the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP handler event error: {}", e);
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| WalkError::Browser(e.to_string()))?;
        if let Err(e) = self.browser.wait().await {
            warn!("browser process did not exit cleanly: {}", e);
        }
        self.handler_task.abort();
        Ok(())
    }
}

#[async_trait]
impl Browser for CdpSession {
    type Page = CdpPage;

    async fn new_page(&self) -> Result<CdpPage> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| WalkError::Browser(e.to_string()))?;
        Ok(CdpPage { page })
    }
}

/// One Chrome tab driven over CDP.
pub struct CdpPage {
    page: Page,
}

#[async_trait]
impl PageDriver for CdpPage {
    async fn goto(&self, url: &str, timeout: Duration) -> Result<()> {
        debug!("navigating to {}", url);
        match tokio::time::timeout(timeout, self.page.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(WalkError::Browser(e.to_string())),
            Err(_) => Err(WalkError::Timeout(timeout)),
        }
    }

    async fn click(&self, selector: &str, timeout: Duration) -> Result<()> {
        debug!("clicking {}", selector);
        let locate_and_click = async {
            let element = self
                .page
                .find_element(selector)
                .await
                .map_err(|e| WalkError::Browser(e.to_string()))?;
            element
                .click()
                .await
                .map_err(|e| WalkError::Browser(e.to_string()))?;
            Ok(())
        };
        match tokio::time::timeout(timeout, locate_and_click).await {
            Ok(result) => result,
            Err(_) => Err(WalkError::Timeout(timeout)),
        }
    }

    async fn scrape(&self) -> Result<ScrapedData> {
        let text: String = self
            .page
            .evaluate(TEXT_SNIPPET)
            .await
            .map_err(|e| WalkError::Browser(e.to_string()))?
            .into_value()?;

        let images: Vec<String> = self
            .page
            .evaluate(IMAGES_SNIPPET)
            .await
            .map_err(|e| WalkError::Browser(e.to_string()))?
            .into_value()?;

        let clickables: Vec<ClickableElement> = self
            .page
            .evaluate_function(CLICKABLES_SNIPPET)
            .await
            .map_err(|e| WalkError::Browser(e.to_string()))?
            .into_value()?;

        debug!(
            "scraped {} images, {} clickables",
            images.len(),
            clickables.len()
        );

        Ok(ScrapedData {
            text,
            images,
            clickables,
        })
    }

    async fn close(&self) -> Result<()> {
        self.page
            .clone()
            .close()
            .await
            .map_err(|e| WalkError::Browser(e.to_string()))
    }
}
