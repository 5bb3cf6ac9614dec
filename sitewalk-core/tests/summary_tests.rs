// Tests for the summarizer counters and report rendering.

use sitewalk_core::{render_summary_report, summarize_results, summarize_site};
use sitewalk_scanner::{
    ClickOutcome, ClickableElement, ResultSet, ScrapedData, SiteResult, SiteSource,
};

fn sample_site() -> SiteResult {
    let clickables: Vec<ClickableElement> = (0..10)
        .map(|i| ClickableElement::new(format!("Link {}", i), None, format!("A.link{}", i)))
        .collect();
    SiteResult {
        url: "https://www.example.com/".to_string(),
        source: SiteSource::Live,
        scraped_data: ScrapedData {
            text: "hello world".to_string(),
            images: (0..5)
                .map(|i| format!("https://www.example.com/{}.png", i))
                .collect(),
            clickables,
        },
        click_results: vec![
            ClickOutcome::success("A.link0", SiteSource::Live),
            ClickOutcome::success("A.link1", SiteSource::Live),
            ClickOutcome::failed("A.link2", "timeout", SiteSource::Live),
        ],
    }
}

#[test]
fn test_site_counters() {
    let summary = summarize_site("live", &sample_site());

    assert_eq!(summary.total_images, 5);
    assert_eq!(summary.total_clickables, 10);
    assert_eq!(summary.unique_selectors, 3);
    assert_eq!(summary.successful_clicks, 2);
    assert_eq!(summary.failed_clicks, 1);
    assert_eq!(summary.text_length, 11);
    assert_eq!(summary.word_count, 2);
}

#[test]
fn test_duplicate_selectors_counted_once() {
    let mut site = sample_site();
    site.click_results
        .push(ClickOutcome::success("A.link0", SiteSource::Live));

    let summary = summarize_site("live", &site);

    assert_eq!(summary.unique_selectors, 3);
    assert_eq!(summary.successful_clicks, 3);
}

#[test]
fn test_empty_selectors_not_counted() {
    let mut site = sample_site();
    site.click_results
        .push(ClickOutcome::success("", SiteSource::Live));

    let summary = summarize_site("live", &site);

    assert_eq!(summary.unique_selectors, 3);
}

#[test]
fn test_summarize_results_one_summary_per_site() {
    let mut results = ResultSet::new();
    results.insert("live".to_string(), sample_site());
    results.insert("staging".to_string(), sample_site());

    let summaries = summarize_results(&results);

    assert_eq!(summaries.len(), 2);
    let names: Vec<&str> = summaries.iter().map(|s| s.site.as_str()).collect();
    assert!(names.contains(&"live"));
    assert!(names.contains(&"staging"));
}

#[test]
fn test_report_contains_labelled_counters() {
    let summary = summarize_site("live", &sample_site());
    let report = render_summary_report(&[summary]);

    assert!(report.contains("SITE SUMMARY REPORT"));
    assert!(report.contains("=== LIVE SITE ==="));
    assert!(report.contains("Total images:         5"));
    assert!(report.contains("Total clickables:     10"));
    assert!(report.contains("Unique selectors:     3"));
    assert!(report.contains("Successful clicks:    2"));
    assert!(report.contains("Failed clicks:        1"));
    assert!(report.contains("Text length:          11 characters"));
    assert!(report.contains("Word count:           2 words"));
}

#[test]
fn test_report_groups_large_numbers() {
    let mut site = sample_site();
    site.scraped_data.text = "x".repeat(12_345);

    let summary = summarize_site("live", &site);
    let report = render_summary_report(&[summary]);

    assert!(report.contains("Text length:          12,345 characters"));
}
