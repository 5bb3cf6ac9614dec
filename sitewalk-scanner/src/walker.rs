use crate::blacklist::Blacklist;
use crate::browser::{Browser, PageDriver, Timeouts};
use crate::result::{ResultSet, SiteResult, SiteSource};
use crate::traversal::TraversalEngine;
use crate::visited::VisitedRegistry;
use std::sync::Arc;
use tracing::{info, warn};

/// Callback for reporting walk progress to the console.
pub type ProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// A configured top-level URL to begin traversal from, keyed by a logical
/// site name such as "staging" or "live".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub name: String,
    pub url: String,
}

impl Seed {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Iterates the configured seeds, one at a time, running the traversal
/// engine over each page's clickables. Owns the visited registry for the
/// run; a seed-level failure aborts that seed only.
pub struct Walker<B: Browser> {
    browser: B,
    blacklist: Blacklist,
    timeouts: Timeouts,
    visited: VisitedRegistry,
    progress_callback: Option<ProgressCallback>,
}

impl<B: Browser> Walker<B> {
    pub fn new(browser: B, blacklist: Blacklist) -> Self {
        Self {
            browser,
            blacklist,
            timeouts: Timeouts::default(),
            visited: VisitedRegistry::new(),
            progress_callback: None,
        }
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub async fn run(&mut self, seeds: &[Seed]) -> ResultSet {
        let engine = TraversalEngine::new(self.blacklist.clone(), self.timeouts);
        let mut results = ResultSet::new();

        for seed in seeds {
            if self.visited.contains(&seed.url) {
                self.report(format!("Skipping already visited: {}", seed.url));
                continue;
            }
            self.visited.insert(&seed.url);

            let source = SiteSource::detect(&seed.url);
            self.report(format!(
                "Visiting [{}]: {}",
                source.to_string().to_uppercase(),
                seed.url
            ));

            let page = match self.browser.new_page().await {
                Ok(page) => page,
                Err(e) => {
                    warn!("could not open a page for {}: {}", seed.url, e);
                    self.report(format!("Failed to open a page for {}: {}", seed.url, e));
                    continue;
                }
            };

            if let Err(e) = page.goto(&seed.url, self.timeouts.seed_nav).await {
                warn!("failed to load {}: {}", seed.url, e);
                self.report(format!("Failed to load {}: {}", seed.url, e));
                let _ = page.close().await;
                continue;
            }

            if self.blacklist.is_match(&seed.url) {
                self.report(format!("Skipping blacklisted: {}", seed.url));
                let _ = page.close().await;
                continue;
            }

            let scraped = match page.scrape().await {
                Ok(scraped) => scraped,
                Err(e) => {
                    warn!("failed to scrape {}: {}", seed.url, e);
                    self.report(format!("Failed to scrape {}: {}", seed.url, e));
                    let _ = page.close().await;
                    continue;
                }
            };

            let click_results = engine
                .exercise_page(
                    &page,
                    &seed.url,
                    source,
                    &scraped.clickables,
                    &mut self.visited,
                )
                .await;

            let _ = page.close().await;

            info!(
                "{}: {} clickables exercised, {} destinations visited so far",
                seed.name,
                click_results.len(),
                self.visited.len()
            );

            results.insert(
                seed.name.clone(),
                SiteResult {
                    url: seed.url.clone(),
                    source,
                    scraped_data: scraped,
                    click_results,
                },
            );
        }

        results
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn into_browser(self) -> B {
        self.browser
    }

    fn report(&self, message: String) {
        info!("{}", message);
        if let Some(ref callback) = self.progress_callback {
            callback(message);
        }
    }
}
