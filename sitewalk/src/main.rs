use commands::command_argument_builder;
use sitewalk::handlers::{handle_clean, handle_summarize, handle_walk};
use sitewalk_core::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    match chosen_command.subcommand() {
        Some(("walk", primary_command)) => handle_walk(primary_command).await,
        Some(("clean", primary_command)) => handle_clean(primary_command),
        Some(("summarize", primary_command)) => handle_summarize(primary_command),
        None => {}
        _ => unreachable!("clap should ensure we don't get here"),
    }
}
