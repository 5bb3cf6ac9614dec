use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One interactive element discovered on a page. The selector is derived
/// from tag name, id and class list and is NOT guaranteed unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickableElement {
    pub text: String,
    pub href: Option<String>,
    pub selector: String,
}

impl ClickableElement {
    pub fn new(
        text: impl Into<String>,
        href: Option<String>,
        selector: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            href,
            selector: selector.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickStatus {
    Success,
    Fail,
    Skipped,
}

impl ClickStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "success" => Some(ClickStatus::Success),
            "fail" => Some(ClickStatus::Fail),
            "skipped" => Some(ClickStatus::Skipped),
            _ => None,
        }
    }
}

impl fmt::Display for ClickStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClickStatus::Success => "success",
            ClickStatus::Fail => "fail",
            ClickStatus::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

/// Why an element was skipped instead of exercised. `Other` catches reasons
/// written by newer versions so old files still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    #[serde(rename = "blacklisted/external")]
    BlacklistedExternal,
    #[serde(rename = "already_visited")]
    AlreadyVisited,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::BlacklistedExternal => "blacklisted/external",
            SkipReason::AlreadyVisited => "already_visited",
            SkipReason::Other(other) => other.as_str(),
        };
        write!(f, "{}", s)
    }
}

/// Whether a site is the staging or the live variant, classified from the
/// URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteSource {
    Staging,
    Live,
}

impl SiteSource {
    pub fn detect(url: &str) -> Self {
        if url.contains("staging") {
            SiteSource::Staging
        } else {
            SiteSource::Live
        }
    }
}

impl fmt::Display for SiteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SiteSource::Staging => "staging",
            SiteSource::Live => "live",
        };
        write!(f, "{}", s)
    }
}

/// The outcome of processing one clickable element. Skipped records carry a
/// reason and no error; failed records carry an error and no reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickOutcome {
    pub selector: String,
    pub status: ClickStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SkipReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub source: SiteSource,
}

impl ClickOutcome {
    pub fn success(selector: impl Into<String>, source: SiteSource) -> Self {
        Self {
            selector: selector.into(),
            status: ClickStatus::Success,
            reason: None,
            error: None,
            source,
        }
    }

    pub fn skipped(selector: impl Into<String>, reason: SkipReason, source: SiteSource) -> Self {
        Self {
            selector: selector.into(),
            status: ClickStatus::Skipped,
            reason: Some(reason),
            error: None,
            source,
        }
    }

    pub fn failed(selector: impl Into<String>, error: impl Into<String>, source: SiteSource) -> Self {
        Self {
            selector: selector.into(),
            status: ClickStatus::Fail,
            reason: None,
            error: Some(error.into()),
            source,
        }
    }
}

/// Everything scraped from one page in a single DOM pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapedData {
    pub text: String,
    pub images: Vec<String>,
    pub clickables: Vec<ClickableElement>,
}

/// The full record for one seed page: what was scraped and what happened
/// when each clickable was exercised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteResult {
    pub url: String,
    pub source: SiteSource,
    pub scraped_data: ScrapedData,
    pub click_results: Vec<ClickOutcome>,
}

/// Site name to site result. BTreeMap keeps the persisted key order
/// deterministic across runs.
pub type ResultSet = BTreeMap<String, SiteResult>;
