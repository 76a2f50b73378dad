//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A command line utility to dump sqlite database as JSON.
///
/// It dumps the metadata of the table including name and schema as JSON.
/// The program also dumps the rows of given table as JSON.
#[derive(Parser, Debug)]
#[command(name = "sqlite-diffable")]
#[command(author, version, about)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dump sqlite database metadata and table
    Dump(DumpArgs),
}

/// Arguments for the dump command
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Path to sqlite database
    #[arg(short, long, env = "SQLITE_DIFFABLE_PATH")]
    pub path: PathBuf,

    /// Output directory
    #[arg(short, long, env = "SQLITE_DIFFABLE_OUTPUT")]
    pub output: PathBuf,

    /// Dump all tables
    #[arg(long)]
    pub all: bool,

    /// Tables to dump (ignored with --all)
    #[arg(value_name = "TABLES")]
    pub tables: Vec<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
