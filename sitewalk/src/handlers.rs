use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sitewalk_core::{
    clean_file, load_results, render_summary_report, save_results, summarize_results, CleanConfig,
    StageError,
};
use sitewalk_scanner::{
    Blacklist, CdpSession, ClickStatus, ProgressCallback, Seed, SiteSource, Timeouts, Walker,
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Parse one seeds-file line as `name=url`, or a bare URL whose name is the
/// detected source. Blank lines and `#` comments yield nothing.
pub fn parse_seed_line(line: &str) -> Option<Seed> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (name, url) = match line.split_once('=') {
        Some((name, url)) => (name.trim().to_string(), url.trim().to_string()),
        None => (SiteSource::detect(line).to_string(), line.to_string()),
    };

    if name.is_empty() {
        eprintln!("⚠️  Skipping seed with empty name '{}'", line);
        return None;
    }
    if Url::parse(&url).is_err() {
        eprintln!("⚠️  Skipping invalid URL '{}'", url);
        return None;
    }

    Some(Seed::new(name, url))
}

/// Load and parse seeds from a file
pub fn load_seeds_from_file(path: &Path) -> Result<Vec<Seed>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read seeds file {}: {}", path.display(), e))?;

    let seeds: Vec<Seed> = content.lines().filter_map(parse_seed_line).collect();

    if seeds.is_empty() {
        return Err(format!("No valid seeds found in {}", path.display()));
    }

    Ok(seeds)
}

/// Load seeds from either a file or a single URL argument
pub fn load_seeds_from_source(
    url: Option<&Url>,
    name: Option<&String>,
    seeds_file: Option<&Path>,
) -> Result<Vec<Seed>, String> {
    if let Some(path) = seeds_file {
        load_seeds_from_file(path)
    } else if let Some(url) = url {
        let name = name
            .cloned()
            .unwrap_or_else(|| SiteSource::detect(url.as_str()).to_string());
        Ok(vec![Seed::new(name, url.as_str())])
    } else {
        Err("Either --url or --seeds-file must be provided".to_string())
    }
}

/// Load blacklist substrings from a file, one per line. Blank lines and
/// `#` comments are ignored.
pub fn load_blacklist_from_file(path: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read blacklist file {}: {}", path.display(), e))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Parse `--drop-status` values. The sentinel `none` empties the set so the
/// status filter can be switched off independently of the reason filter.
pub fn parse_status_filters(values: &[String]) -> HashSet<ClickStatus> {
    let mut statuses = HashSet::new();
    for value in values {
        if value == "none" {
            return HashSet::new();
        }
        match ClickStatus::from_str(value) {
            Some(status) => {
                statuses.insert(status);
            }
            None => eprintln!("⚠️  Skipping unknown status '{}'", value),
        }
    }
    statuses
}

/// Parse `--drop-reason` values, with the same `none` sentinel.
pub fn parse_reason_filters(values: &[String]) -> HashSet<String> {
    if values.iter().any(|value| value == "none") {
        return HashSet::new();
    }
    values.iter().cloned().collect()
}

pub async fn handle_walk(args: &ArgMatches) {
    tracing_subscriber::fmt::init();

    let url = args.get_one::<Url>("url");
    let name = args.get_one::<String>("name");
    let seeds_file = args.get_one::<String>("seeds-file").map(|raw| expand_path(raw));
    let blacklist_file = args
        .get_one::<String>("blacklist-file")
        .map(|raw| expand_path(raw));
    let output = expand_path(args.get_one::<String>("output").unwrap());
    let headless = !args.get_flag("headful");

    let timeouts = Timeouts {
        seed_nav: Duration::from_millis(*args.get_one::<u64>("seed-timeout").unwrap()),
        link_nav: Duration::from_millis(*args.get_one::<u64>("link-timeout").unwrap()),
        click: Duration::from_millis(*args.get_one::<u64>("click-timeout").unwrap()),
    };

    let seeds = match load_seeds_from_source(url, name, seeds_file.as_deref()) {
        Ok(seeds) => seeds,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    let patterns = match blacklist_file {
        Some(ref path) => match load_blacklist_from_file(path) {
            Ok(patterns) => patterns,
            Err(e) => {
                eprintln!("{} {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        },
        None => Vec::new(),
    };
    let blacklist = Blacklist::new(patterns);

    print_divider();
    println!("{}", "  SITE WALK".bright_white().bold());
    print_divider();
    println!("{} Seeds: {}", "→".blue(), seeds.len());
    println!("{} Blacklist patterns: {}", "→".blue(), blacklist.len());
    println!(
        "{} Output: {}",
        "→".blue(),
        output.display().to_string().bright_white()
    );
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Launching browser...");

    let session = match CdpSession::launch(headless).await {
        Ok(session) => session,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} Failed to launch browser: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    let spinner_clone = spinner.clone();
    let progress: ProgressCallback = Arc::new(move |message: String| {
        spinner_clone.println(format!("  {}", message));
    });

    let mut walker = Walker::new(session, blacklist)
        .with_timeouts(timeouts)
        .with_progress_callback(progress);

    spinner.set_message("Walking...");
    let results = walker.run(&seeds).await;
    let visited = walker.visited_count();
    spinner.finish_with_message(format!(
        "Walk complete! {} destinations visited",
        visited
    ));

    if let Err(e) = walker.into_browser().close().await {
        eprintln!(
            "{} Browser did not shut down cleanly: {}",
            "⚠".yellow().bold(),
            e
        );
    }

    match save_results(&output, &results) {
        Ok(()) => {
            println!();
            println!(
                "{} Done! Results saved to {}",
                "✓".green().bold(),
                output.display().to_string().bright_white()
            );
        }
        Err(e) => {
            eprintln!("{} Failed to save results: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

pub fn handle_clean(args: &ArgMatches) {
    let input = expand_path(args.get_one::<String>("input").unwrap());
    let output = expand_path(args.get_one::<String>("output").unwrap());

    let statuses: Vec<String> = args
        .get_many::<String>("drop-status")
        .unwrap_or_default()
        .cloned()
        .collect();
    let reasons: Vec<String> = args
        .get_many::<String>("drop-reason")
        .unwrap_or_default()
        .cloned()
        .collect();
    let config = CleanConfig::new(parse_status_filters(&statuses), parse_reason_filters(&reasons));

    match clean_file(&input, &output, &config) {
        Ok((before, after)) => {
            println!(
                "{} Dropped {} of {} click results",
                "✓".green().bold(),
                before - after,
                before
            );
            println!(
                "{} Cleaned data saved to {}",
                "✓".green().bold(),
                output.display().to_string().bright_white()
            );
        }
        Err(StageError::MissingInput(path)) => {
            println!("{} File not found: {}", "⚠".yellow().bold(), path.display());
        }
        Err(e) => {
            eprintln!("{} Clean failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

pub fn handle_summarize(args: &ArgMatches) {
    let input = expand_path(args.get_one::<String>("input").unwrap());

    match load_results(&input) {
        Ok(results) => {
            let summaries = summarize_results(&results);
            print!("{}", render_summary_report(&summaries));
        }
        Err(StageError::MissingInput(path)) => {
            println!("{} File not found: {}", "⚠".yellow().bold(), path.display());
        }
        Err(e) => {
            eprintln!("{} Summarize failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
