pub mod clean;
pub mod error;
pub mod store;
pub mod summary;

pub use clean::{clean_file, clean_results, CleanConfig};
pub use error::StageError;
pub use store::{load_results, save_results};
pub use summary::{render_summary_report, summarize_results, summarize_site, SiteSummary};

pub fn print_banner() {
    println!(
        r#"
     _ _                   _ _
 ___(_) |_ _____ __ ____ _| | |__
(_-<| |  _/ -_) V  V / _` | | / /
/__/|_|\__\___|\_/\_/\__,_|_|_\_\
"#
    );
    println!("sitewalk v{}", env!("CARGO_PKG_VERSION"));
}
