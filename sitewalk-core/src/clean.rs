use crate::error::Result;
use crate::store;
use sitewalk_scanner::{ClickStatus, ResultSet, SiteResult};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Which records the cleaning pass drops. The two sets are independent:
/// a record goes when its status is blacklisted OR its reason is.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub blacklisted_statuses: HashSet<ClickStatus>,
    pub blacklisted_reasons: HashSet<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            blacklisted_statuses: HashSet::from([ClickStatus::Skipped]),
            blacklisted_reasons: HashSet::from([
                "already_visited".to_string(),
                "blacklisted/external".to_string(),
            ]),
        }
    }
}

impl CleanConfig {
    pub fn new(
        blacklisted_statuses: HashSet<ClickStatus>,
        blacklisted_reasons: HashSet<String>,
    ) -> Self {
        Self {
            blacklisted_statuses,
            blacklisted_reasons,
        }
    }
}

/// Drop blacklisted records, then collapse duplicate selectors keeping the
/// first survivor. Site keys and scraped data pass through untouched;
/// records are only ever removed, never added.
pub fn clean_results(results: &ResultSet, config: &CleanConfig) -> ResultSet {
    let mut cleaned = ResultSet::new();

    for (name, site) in results {
        let mut seen_selectors: HashSet<&str> = HashSet::new();
        let mut kept = Vec::new();

        for entry in &site.click_results {
            if config.blacklisted_statuses.contains(&entry.status) {
                continue;
            }
            if let Some(ref reason) = entry.reason {
                if config.blacklisted_reasons.contains(&reason.to_string()) {
                    continue;
                }
            }
            if !seen_selectors.insert(entry.selector.as_str()) {
                continue;
            }
            kept.push(entry.clone());
        }

        debug!(
            "{}: kept {} of {} click results",
            name,
            kept.len(),
            site.click_results.len()
        );

        cleaned.insert(
            name.clone(),
            SiteResult {
                click_results: kept,
                ..site.clone()
            },
        );
    }

    cleaned
}

/// Load, clean, save. Returns the click-result counts before and after.
pub fn clean_file(input: &Path, output: &Path, config: &CleanConfig) -> Result<(usize, usize)> {
    let results = store::load_results(input)?;
    let before: usize = results.values().map(|s| s.click_results.len()).sum();

    let cleaned = clean_results(&results, config);
    let after: usize = cleaned.values().map(|s| s.click_results.len()).sum();

    store::save_results(output, &cleaned)?;
    info!(
        "cleaned {}: {} -> {} click results",
        input.display(),
        before,
        after
    );
    Ok((before, after))
}
