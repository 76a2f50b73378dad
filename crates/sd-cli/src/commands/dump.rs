//! Dump command implementation

use anyhow::{Context, Result};
use sd_core::{
    check_usage, export_tables, prepare_output_dir, select_tables, validate_database_path,
};
use sd_db::{Database, SqliteBackend};

use crate::cli::DumpArgs;

/// Execute the dump command
pub async fn execute(args: &DumpArgs) -> Result<()> {
    validate_database_path(&args.path)?;
    prepare_output_dir(&args.output)?;
    check_usage(args.all, &args.tables)?;

    let db = SqliteBackend::from_path(&args.path).context("Failed to connect to database")?;

    let available = db.list_tables().await.context("Failed to list tables")?;
    log::debug!(
        "Found {} table(s) in {} database {}",
        available.len(),
        db.db_type(),
        args.path.display()
    );

    let tables = select_tables(args.all, &args.tables, &available)?;
    let summaries = export_tables(&db, &tables, &args.output).await?;

    log::debug!(
        "Dumped {} table(s) to {}",
        summaries.len(),
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
#[path = "dump_test.rs"]
mod tests;
