use sitewalk::handlers::*;
use sitewalk_scanner::ClickStatus;
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use url::Url;

#[test]
fn test_parse_seed_line_named() {
    let seed = parse_seed_line("staging=https://staging.example.com/").unwrap();
    assert_eq!(seed.name, "staging");
    assert_eq!(seed.url, "https://staging.example.com/");
}

#[test]
fn test_parse_seed_line_bare_url_takes_detected_source_name() {
    let seed = parse_seed_line("https://www.example.com/").unwrap();
    assert_eq!(seed.name, "live");

    let seed = parse_seed_line("https://example.r-e-d-staging.co.za/").unwrap();
    assert_eq!(seed.name, "staging");
}

#[test]
fn test_parse_seed_line_ignores_comments_and_blanks() {
    assert!(parse_seed_line("").is_none());
    assert!(parse_seed_line("   ").is_none());
    assert!(parse_seed_line("# staging=https://example.com/").is_none());
}

#[test]
fn test_parse_seed_line_rejects_invalid() {
    assert!(parse_seed_line("live=not a url").is_none());
    assert!(parse_seed_line("=https://example.com/").is_none());
}

#[test]
fn test_load_seeds_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "# site pair under comparison")?;
    writeln!(temp_file, "staging=https://staging.example.com/")?;
    writeln!(temp_file)?;
    writeln!(temp_file, "live=https://www.example.com/")?;

    let path = PathBuf::from(temp_file.path());
    let seeds = load_seeds_from_file(&path)?;

    assert_eq!(seeds.len(), 2);
    assert_eq!(seeds[0].name, "staging");
    assert_eq!(seeds[1].url, "https://www.example.com/");

    Ok(())
}

#[test]
fn test_load_seeds_from_file_empty() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "# nothing here").unwrap();

    let path = PathBuf::from(temp_file.path());
    let result = load_seeds_from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("No valid seeds"));
}

#[test]
fn test_load_seeds_from_source_single_url() {
    let url = Url::parse("https://www.example.com").unwrap();
    let seeds = load_seeds_from_source(Some(&url), None, None).unwrap();

    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].name, "live");
    assert_eq!(seeds[0].url, "https://www.example.com/");
}

#[test]
fn test_load_seeds_from_source_explicit_name() {
    let url = Url::parse("https://www.example.com").unwrap();
    let name = "candidate".to_string();
    let seeds = load_seeds_from_source(Some(&url), Some(&name), None).unwrap();

    assert_eq!(seeds[0].name, "candidate");
}

#[test]
fn test_load_seeds_from_source_no_input() {
    let result = load_seeds_from_source(None, None, None);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("--url or --seeds-file"));
}

#[test]
fn test_load_blacklist_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "twitter.com")?;
    writeln!(temp_file, "# social")?;
    writeln!(temp_file, "  instagram.com  ")?;
    writeln!(temp_file)?;

    let path = PathBuf::from(temp_file.path());
    let patterns = load_blacklist_from_file(&path)?;

    assert_eq!(patterns, vec!["twitter.com", "instagram.com"]);

    Ok(())
}

#[test]
fn test_parse_status_filters() {
    let values = vec!["skipped".to_string(), "fail".to_string()];
    let statuses = parse_status_filters(&values);

    assert_eq!(
        statuses,
        HashSet::from([ClickStatus::Skipped, ClickStatus::Fail])
    );
}

#[test]
fn test_parse_status_filters_none_sentinel() {
    let values = vec!["skipped".to_string(), "none".to_string()];
    assert!(parse_status_filters(&values).is_empty());
}

#[test]
fn test_parse_status_filters_skips_unknown() {
    let values = vec!["skipped".to_string(), "bogus".to_string()];
    let statuses = parse_status_filters(&values);

    assert_eq!(statuses, HashSet::from([ClickStatus::Skipped]));
}

#[test]
fn test_parse_reason_filters() {
    let values = vec!["already_visited".to_string()];
    let reasons = parse_reason_filters(&values);

    assert_eq!(reasons, HashSet::from(["already_visited".to_string()]));

    let none = vec!["none".to_string()];
    assert!(parse_reason_filters(&none).is_empty());
}
