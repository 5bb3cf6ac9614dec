use crate::error::Result;
use crate::result::ScrapedData;
use async_trait::async_trait;
use std::time::Duration;

/// Bounded timeouts for the three kinds of browser-driven operation.
/// Seed navigation gets the longest allowance, followed links less,
/// in-place clicks the least.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub seed_nav: Duration,
    pub link_nav: Duration,
    pub click: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            seed_nav: Duration::from_millis(20_000),
            link_nav: Duration::from_millis(10_000),
            click: Duration::from_millis(3_000),
        }
    }
}

/// One open page. All operations return explicit results; a timeout or a
/// DOM error comes back as `Err`, never as a panic.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Whole-page navigation, bounded by `timeout`.
    async fn goto(&self, url: &str, timeout: Duration) -> Result<()>;

    /// Locate an element by selector and click it in place, bounded by
    /// `timeout`.
    async fn click(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Extract page text, image sources and the clickable-element list in
    /// one DOM pass.
    async fn scrape(&self) -> Result<ScrapedData>;

    async fn close(&self) -> Result<()>;
}

/// A running browser session. The orchestrator opens one page per seed and
/// closes it when the seed is done, whatever the outcome.
#[async_trait]
pub trait Browser: Send + Sync {
    type Page: PageDriver;

    async fn new_page(&self) -> Result<Self::Page>;
}
