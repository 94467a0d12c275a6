use clap::{Args, Parser};
use std::path::PathBuf;

use super::types::{OnErrorArg, OutputFormat, PreviewArg};

/// Quickly rename your files in bulk
#[derive(Parser, Debug)]
#[command(name = "bulkren")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The pattern to match in the file names
    #[arg(short = 'p', long, value_name = "REGEX", allow_hyphen_values = true)]
    pub pattern: String,

    /// The replacement for the matched pattern ($1, ${1} or ${name} refer to capture groups)
    #[arg(short = 'r', long, value_name = "STRING", allow_hyphen_values = true)]
    pub replacement: String,

    /// Print the changes without actually renaming the files
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// What to do when a rename fails (defaults from config, else abort)
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_error: Option<OnErrorArg>,

    /// Dry-run preview format (defaults from config, else plain)
    #[arg(long, value_enum)]
    pub preview: Option<PreviewArg>,

    /// Print a result summary after the run
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,

    /// The files to rename
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

/// Log verbosity arguments
#[derive(Args, Debug, Clone)]
pub struct LoggingArgs {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable logging, including warnings
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
