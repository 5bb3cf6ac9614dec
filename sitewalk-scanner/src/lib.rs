pub mod blacklist;
pub mod browser;
pub mod cdp;
pub mod error;
pub mod result;
pub mod traversal;
pub mod visited;
pub mod walker;

pub use blacklist::Blacklist;
pub use browser::{Browser, PageDriver, Timeouts};
pub use cdp::{CdpPage, CdpSession};
pub use error::WalkError;
pub use result::{
    ClickOutcome, ClickStatus, ClickableElement, ResultSet, ScrapedData, SiteResult, SiteSource,
    SkipReason,
};
pub use traversal::TraversalEngine;
pub use visited::VisitedRegistry;
pub use walker::{ProgressCallback, Seed, Walker};
