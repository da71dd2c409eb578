use clap::{Args, Parser, Subcommand};

use tweetline_core::input::DEFAULT_TIMELINE_WORDS;
use tweetline_core::VERSION;

/// Tweetline - input handling for a tweet-analysis pipeline
#[derive(Parser)]
#[command(name = "tweetline")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Number of words in the word timeline
    #[arg(
        short = 'w',
        long = "words",
        value_name = "N",
        global = true,
        allow_negative_numbers = true,
        default_value_t = DEFAULT_TIMELINE_WORDS
    )]
    pub words: i64,

    /// Path to the pipeline configuration file
    #[arg(short, long, global = true, env = "TWEETLINE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `prepare` command
#[derive(Args)]
pub struct PrepareArgs {
    /// Output the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sanitize the raw input file and load the filter and relation data
    Prepare(PrepareArgs),

    /// Move the generated report files into the results directory
    Cleanup,
}
