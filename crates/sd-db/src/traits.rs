//! Database trait definition

use crate::error::DbResult;
use crate::value::Value;
use async_trait::async_trait;
use std::io;

/// Receives the result of a table scan, one row at a time.
///
/// `columns` is called exactly once, before the first row. Rows are handed
/// over in the order the cursor yields them and borrow a buffer that is
/// reused between rows.
pub trait RowSink: Send {
    /// Ordered column names of the scanned result
    fn columns(&mut self, columns: &[String]) -> io::Result<()>;

    /// One row, positionally aligned with the column names
    fn row(&mut self, values: &[Value]) -> io::Result<()>;
}

/// Database abstraction trait for sqlite-diffable
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// List every table in the catalog, in catalog order
    async fn list_tables(&self) -> DbResult<Vec<String>>;

    /// Raw DDL of a table, or an empty string when the catalog has none
    async fn table_schema(&self, table: &str) -> DbResult<String>;

    /// Stream every row of `table` into `sink`
    async fn scan_table(&self, table: &str, sink: &mut dyn RowSink) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
