use bulkren_core::Config;
use clap::Parser;
use log::{warn, LevelFilter};
use std::process;

mod cli;
mod rename;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.logging.verbose, cli.logging.quiet);

    // Load config to get defaults
    let config = Config::load().unwrap_or_else(|e| {
        warn!("{e:#}, using default settings");
        Config::default()
    });

    match rename::handle_rename(cli, &config) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}

/// Levels: default warn, `-v` info, `-vv` debug, `-vvv` trace, `-q` off.
/// `BULKREN_LOG` takes env_logger filter directives and wins over the flags.
fn setup_logging(verbose: u8, quiet: bool) {
    let log_level = if quiet {
        LevelFilter::Off
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .parse_env("BULKREN_LOG")
        .init();
}
