use crate::error::{Result, StageError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use sitewalk_scanner::ResultSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

/// Write a result set as UTF-8 JSON with 4-space indentation.
pub fn save_results(path: &Path, results: &ResultSet) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    results.serialize(&mut serializer)?;
    info!("saved {} site results to {}", results.len(), path.display());
    Ok(())
}

/// Load a result set. A missing file is a reportable precondition failure,
/// not a crash.
pub fn load_results(path: &Path) -> Result<ResultSet> {
    if !path.exists() {
        return Err(StageError::MissingInput(path.to_path_buf()));
    }
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitewalk_scanner::{ClickOutcome, ScrapedData, SiteResult, SiteSource};

    fn sample_results() -> ResultSet {
        let mut results = ResultSet::new();
        results.insert(
            "live".to_string(),
            SiteResult {
                url: "https://www.example.com/".to_string(),
                source: SiteSource::Live,
                scraped_data: ScrapedData::default(),
                click_results: vec![ClickOutcome::success("A.nav", SiteSource::Live)],
            },
        );
        results
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site_comparison.json");

        save_results(&path, &sample_results()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n    \"live\""));
        assert!(raw.contains("\n        \"url\""));

        let loaded = load_results(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded["live"].url, "https://www.example.com/");
    }

    #[test]
    fn test_load_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let result = load_results(&path);
        assert!(matches!(result, Err(StageError::MissingInput(_))));
    }
}
