use crate::blacklist::Blacklist;
use crate::browser::{PageDriver, Timeouts};
use crate::result::{ClickOutcome, ClickableElement, SiteSource, SkipReason};
use crate::visited::VisitedRegistry;
use tracing::{debug, warn};

/// Decides, for each clickable on a page, whether to skip it, follow its
/// href, or click it in place, and records a uniform outcome either way.
pub struct TraversalEngine {
    blacklist: Blacklist,
    timeouts: Timeouts,
}

impl TraversalEngine {
    pub fn new(blacklist: Blacklist, timeouts: Timeouts) -> Self {
        Self {
            blacklist,
            timeouts,
        }
    }

    /// Exercise a page's clickables in list order. Always produces exactly
    /// one outcome per element; element failures are captured, never
    /// propagated.
    pub async fn exercise_page<D: PageDriver>(
        &self,
        page: &D,
        base_url: &str,
        source: SiteSource,
        clickables: &[ClickableElement],
        visited: &mut VisitedRegistry,
    ) -> Vec<ClickOutcome> {
        let mut outcomes = Vec::with_capacity(clickables.len());
        for element in clickables {
            outcomes.push(
                self.exercise_element(page, base_url, source, element, visited)
                    .await,
            );
        }
        outcomes
    }

    async fn exercise_element<D: PageDriver>(
        &self,
        page: &D,
        base_url: &str,
        source: SiteSource,
        element: &ClickableElement,
        visited: &mut VisitedRegistry,
    ) -> ClickOutcome {
        let href = element.href.as_deref().unwrap_or("");

        // Blacklist/external takes precedence over the visited check so an
        // external link is never reported as a fresh visit.
        if self.blacklist.is_match(href) || (!href.is_empty() && !href.starts_with(base_url)) {
            debug!("skipping {}: blacklisted or external ({})", element.selector, href);
            return ClickOutcome::skipped(&element.selector, SkipReason::BlacklistedExternal, source);
        }

        if !href.is_empty() && visited.contains(href) {
            debug!("skipping {}: already visited {}", element.selector, href);
            return ClickOutcome::skipped(&element.selector, SkipReason::AlreadyVisited, source);
        }

        let attempt = if href.is_empty() {
            // No destination to follow - a genuine in-place DOM click.
            page.click(&element.selector, self.timeouts.click).await
        } else {
            // Register the destination before navigating so a broken link
            // is consumed rather than retried on a later occurrence.
            visited.insert(href);
            page.goto(href, self.timeouts.link_nav).await
        };

        match attempt {
            Ok(()) => ClickOutcome::success(&element.selector, source),
            Err(e) => {
                warn!("interaction failed on {}: {}", element.selector, e);
                ClickOutcome::failed(&element.selector, e.to_string(), source)
            }
        }
    }
}
