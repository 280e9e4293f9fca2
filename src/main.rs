//! trendctl - configuration manager for a trend-monitoring scraper

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trendctl::cli::Cli;
use trendctl::commands;

const LOG_ENV: &str = "TRENDCTL_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::dispatch(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
