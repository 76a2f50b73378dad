//! Table export
//!
//! Each table is written as two files in the output directory:
//!
//! - `<table>.metadata.json`: name, ordered column names, and the raw DDL,
//!   pretty-printed with 4-space indentation
//! - `<table>.ndjson`: one compact JSON array per row, values in column
//!   order, lines joined by `\n` with no trailing newline
//!
//! Both files are staged as temporary files in the output directory and
//! renamed into place, so a failed export never leaves a partial file under
//! the final name.

use crate::error::{CoreError, CoreResult};
use sd_db::{Database, DbError, RowSink, Value};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Mode of every written file: owner read/write, group and others read.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Metadata record written once per table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub name: String,
    pub columns: Vec<String>,
    pub schema: String,
}

impl TableMetadata {
    /// Pretty JSON with 4-space indentation and no trailing newline
    pub fn to_pretty_json(&self) -> CoreResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}

/// Result of exporting one table
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub table: String,
    pub rows: usize,
    pub metadata_path: PathBuf,
    pub rows_path: PathBuf,
}

/// Path of the metadata file for `table`
pub fn metadata_path(output_dir: &Path, table: &str) -> PathBuf {
    output_dir.join(format!("{table}.metadata.json"))
}

/// Path of the row-data file for `table`
pub fn rows_path(output_dir: &Path, table: &str) -> PathBuf {
    output_dir.join(format!("{table}.ndjson"))
}

/// Table names become file names, so they must stay inside the output directory.
fn check_file_stem(table: &str) -> CoreResult<()> {
    if table.is_empty() || table == "." || table == ".." || table.contains(&['/', '\\'][..]) {
        return Err(CoreError::InvalidPath {
            path: table.to_string(),
            reason: "Table name cannot be used as a file name",
        });
    }
    Ok(())
}

/// Writes scanned rows as newline-separated JSON arrays
struct NdjsonSink<W> {
    writer: W,
    columns: Option<Vec<String>>,
    rows: usize,
}

impl<W: Write> NdjsonSink<W> {
    fn new(writer: W) -> Self {
        Self {
            writer,
            columns: None,
            rows: 0,
        }
    }
}

impl<W: Write + Send> RowSink for NdjsonSink<W> {
    fn columns(&mut self, columns: &[String]) -> io::Result<()> {
        self.columns = Some(columns.to_vec());
        Ok(())
    }

    fn row(&mut self, values: &[Value]) -> io::Result<()> {
        if self.rows > 0 {
            self.writer.write_all(b"\n")?;
        }
        serde_json::to_writer(&mut self.writer, values)?;
        self.rows += 1;
        Ok(())
    }
}

/// Export a single table into `output_dir`.
///
/// Existing files for the table are replaced. A table with no rows produces
/// an empty `.ndjson` file.
pub async fn export_table(
    db: &dyn Database,
    table: &str,
    output_dir: &Path,
) -> CoreResult<ExportSummary> {
    check_file_stem(table)?;

    let metadata_path = metadata_path(output_dir, table);
    let rows_path = rows_path(output_dir, table);

    let mut rows_file = staging_file(output_dir, &rows_path)?;
    let (columns, rows) = {
        let mut sink = NdjsonSink::new(BufWriter::new(rows_file.as_file_mut()));

        db.scan_table(table, &mut sink).await.map_err(|e| match e {
            DbError::Sink(source) => CoreError::io(&rows_path, source),
            other => CoreError::Query(other),
        })?;

        let NdjsonSink {
            writer,
            columns,
            rows,
        } = sink;
        writer
            .into_inner()
            .map_err(|e| CoreError::io(&rows_path, e.into_error()))?;
        (columns, rows)
    };

    let columns = match columns {
        Some(columns) if !columns.is_empty() => columns,
        _ => {
            return Err(CoreError::NoRows {
                table: table.to_string(),
            })
        }
    };

    let metadata = TableMetadata {
        name: table.to_string(),
        columns,
        schema: db.table_schema(table).await?,
    };

    let mut metadata_file = staging_file(output_dir, &metadata_path)?;
    metadata_file
        .write_all(&metadata.to_pretty_json()?)
        .map_err(|e| CoreError::io(&metadata_path, e))?;

    persist(metadata_file, &metadata_path)?;
    persist(rows_file, &rows_path)?;

    Ok(ExportSummary {
        table: table.to_string(),
        rows,
        metadata_path,
        rows_path,
    })
}

/// Export `tables` one after another, stopping at the first failure.
pub async fn export_tables(
    db: &dyn Database,
    tables: &[String],
    output_dir: &Path,
) -> CoreResult<Vec<ExportSummary>> {
    let mut summaries = Vec::with_capacity(tables.len());

    for table in tables {
        let summary = export_table(db, table, output_dir).await?;
        log::info!(
            "Exported {} ({} row{})",
            table,
            summary.rows,
            if summary.rows == 1 { "" } else { "s" }
        );
        summaries.push(summary);
    }

    Ok(summaries)
}

fn staging_file(output_dir: &Path, dest: &Path) -> CoreResult<NamedTempFile> {
    tempfile::Builder::new()
        .prefix(".sqlite-diffable-")
        .tempfile_in(output_dir)
        .map_err(|e| CoreError::io(dest, e))
}

fn persist(file: NamedTempFile, dest: &Path) -> CoreResult<()> {
    set_file_mode(file.as_file()).map_err(|e| CoreError::io(dest, e))?;
    file.persist(dest)
        .map_err(|e| CoreError::io(dest, e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_file_mode(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(FILE_MODE))
}

#[cfg(not(unix))]
fn set_file_mode(_file: &File) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
