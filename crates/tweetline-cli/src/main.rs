//! Tweetline CLI - input handling for a tweet-analysis pipeline
//!
//! `prepare` runs before the (external) analysis stage: it strips null bytes
//! from the raw tweet export and loads the optional filter and relation
//! files. `cleanup` runs after it, collecting the generated reports into the
//! results directory.

mod cli;
mod config;
mod output;

use clap::error::ErrorKind;
use clap::Parser;

use tweetline_core::input::{load_filter_list, load_user_relations};
use tweetline_core::results::collect_reports;
use tweetline_core::sanitize::run_sanitizer;
use tweetline_core::VERSION;

use cli::{Cli, Commands};
use output::RunSummary;

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(_) => {
            eprintln!("Invalid parameters. Aborting.");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let work_dir = std::env::current_dir()?;
    let config = config::load(&work_dir, cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Prepare(args)) => {
            let raw = work_dir.join(&config.input.raw);
            if !raw.exists() {
                return Err(anyhow::anyhow!(
                    "Raw input {} not found in {}",
                    config.input.raw,
                    work_dir.display()
                ));
            }

            run_sanitizer(&work_dir, &config.sanitizer.script, &config.input.sanitized)?;

            let usernames = load_filter_list(&work_dir.join(&config.input.filter_file));
            let relations = load_user_relations(&work_dir.join(&config.input.relations_file))?;

            let summary = RunSummary {
                number_of_words: cli.words,
                usernames_loaded: usernames.len(),
                relations_loaded: relations.len(),
            };
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::summary_json(&summary))?
                );
            } else if !cli.quiet {
                output::print_summary(&summary);
            }
        }
        Some(Commands::Cleanup) => {
            collect_reports(&work_dir, &config.results.directory, &config.input.sanitized)?;
            if !cli.quiet {
                println!("Collected reports into {}", config.results.directory);
            }
        }
        None => {
            println!("Tweetline v{}", VERSION);
            println!("\nRun `tweetline --help` for usage information.");
        }
    }

    Ok(())
}
