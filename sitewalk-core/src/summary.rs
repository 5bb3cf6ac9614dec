use chrono::Local;
use sitewalk_scanner::{ClickStatus, ResultSet, SiteResult};
use std::collections::HashSet;

/// Per-site counters over a (usually cleaned) result set. Image and
/// clickable totals come from the unfiltered scrape; click counters from
/// whatever survived in `click_results`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub site: String,
    pub total_images: usize,
    pub total_clickables: usize,
    pub unique_selectors: usize,
    pub successful_clicks: usize,
    pub failed_clicks: usize,
    pub text_length: usize,
    pub word_count: usize,
}

pub fn summarize_site(name: &str, site: &SiteResult) -> SiteSummary {
    let scraped = &site.scraped_data;

    let selectors: HashSet<&str> = site
        .click_results
        .iter()
        .map(|entry| entry.selector.as_str())
        .filter(|selector| !selector.is_empty())
        .collect();

    SiteSummary {
        site: name.to_string(),
        total_images: scraped.images.len(),
        total_clickables: scraped.clickables.len(),
        unique_selectors: selectors.len(),
        successful_clicks: site
            .click_results
            .iter()
            .filter(|entry| entry.status == ClickStatus::Success)
            .count(),
        failed_clicks: site
            .click_results
            .iter()
            .filter(|entry| entry.status == ClickStatus::Fail)
            .count(),
        text_length: scraped.text.chars().count(),
        word_count: scraped.text.split_whitespace().count(),
    }
}

pub fn summarize_results(results: &ResultSet) -> Vec<SiteSummary> {
    results
        .iter()
        .map(|(name, site)| summarize_site(name, site))
        .collect()
}

/// Format the summaries as the console report. Advisory output only; the
/// persisted files remain the durable record.
pub fn render_summary_report(summaries: &[SiteSummary]) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str(" SITE SUMMARY REPORT\n");
    report.push_str(&format!(
        " Generated: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    for summary in summaries {
        report.push_str(&format!("=== {} SITE ===\n", summary.site.to_uppercase()));
        report.push_str(&format!("Total images:         {}\n", summary.total_images));
        report.push_str(&format!(
            "Total clickables:     {}\n",
            summary.total_clickables
        ));
        report.push_str(&format!(
            "Unique selectors:     {}\n",
            summary.unique_selectors
        ));
        report.push_str(&format!(
            "Successful clicks:    {}\n",
            summary.successful_clicks
        ));
        report.push_str(&format!(
            "Failed clicks:        {}\n",
            summary.failed_clicks
        ));
        report.push_str(&format!(
            "Text length:          {} characters\n",
            thousands(summary.text_length)
        ));
        report.push_str(&format!(
            "Word count:           {} words\n",
            thousands(summary.word_count)
        ));
        report.push_str(&format!("{}\n", "-".repeat(40)));
    }

    report
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }
}
