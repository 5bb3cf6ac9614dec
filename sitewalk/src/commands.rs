use clap::{arg, command};
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitewalk")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitewalk")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("walk")
                .about(
                    "Drive a headless browser over the configured seed pages, exercising every \
                clickable element and recording an outcome for each.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("A single seed URL to walk")
                        .value_parser(clap::value_parser!(Url))
                        .conflicts_with("seeds-file"),
                )
                .arg(
                    arg!(-n --"name" <NAME>)
                        .required(false)
                        .help("Site name for the single seed (default: detected from the URL)")
                        .requires("url"),
                )
                .arg(
                    arg!(-s --"seeds-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of name=url seeds")
                        .conflicts_with("url"),
                )
                .arg(
                    arg!(-b --"blacklist-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of URL blacklist substrings"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Where to save the raw results")
                        .default_value("site_comparison.json"),
                )
                .arg(
                    arg!(--"seed-timeout" <MILLIS>)
                        .required(false)
                        .help("Navigation timeout for seed pages, in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("20000"),
                )
                .arg(
                    arg!(--"link-timeout" <MILLIS>)
                        .required(false)
                        .help("Navigation timeout for followed links, in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10000"),
                )
                .arg(
                    arg!(--"click-timeout" <MILLIS>)
                        .required(false)
                        .help("Timeout for in-place element clicks, in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("3000"),
                )
                .arg(
                    arg!(--"headful")
                        .required(false)
                        .help("Run the browser with a visible window")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("clean")
                .about(
                    "Filter blacklisted records out of a result file and collapse duplicate \
                selectors, keeping the first occurrence.",
                )
                .arg(
                    arg!(-i --"input" <PATH>)
                        .required(false)
                        .help("The raw result file to clean")
                        .default_value("site_comparison.json"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Where to save the cleaned results")
                        .default_value("cleaned_site_comparison.json"),
                )
                .arg(
                    arg!(--"drop-status" <STATUS>)
                        .required(false)
                        .help("Drop records with this status (repeatable; 'none' keeps every status)")
                        .value_parser(["success", "fail", "skipped", "none"])
                        .action(clap::ArgAction::Append)
                        .default_values(["skipped"]),
                )
                .arg(
                    arg!(--"drop-reason" <REASON>)
                        .required(false)
                        .help("Drop records with this skip reason (repeatable; 'none' keeps every reason)")
                        .action(clap::ArgAction::Append)
                        .default_values(["already_visited", "blacklisted/external"]),
                ),
        )
        .subcommand(
            command!("summarize")
                .about("Print per-site summary statistics for a result file.")
                .arg(
                    arg!(-i --"input" <PATH>)
                        .required(false)
                        .help("The result file to summarize")
                        .default_value("cleaned_site_comparison.json"),
                ),
        )
}
