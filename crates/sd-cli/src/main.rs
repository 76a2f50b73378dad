//! sqlite-diffable CLI - dump a SQLite database as JSON

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;
use commands::dump;

const VERBOSE_FILTER: &str = "sd_cli=debug,sd_core=debug,sd_db=debug";

/// Log to stderr; `--verbose` overrides `RUST_LOG`, which defaults to `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Dump(args) => dump::execute(args).await,
    }
}
