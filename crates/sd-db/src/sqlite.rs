//! SQLite database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::{Database, RowSink};
use crate::value::Value;
use async_trait::async_trait;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master WHERE type='table'";
const TABLE_SCHEMA_SQL: &str = "SELECT sql FROM sqlite_schema WHERE name = ?1";

/// SQLite database backend
pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    /// Create a new in-memory SQLite connection
    pub fn in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| DbError::Connection(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an existing database file read-only
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)
            .map_err(|e| DbError::Connection(format!("{e}: {}", path.display())))?;
        log::debug!("Opened database {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute batch SQL synchronously
    pub fn execute_batch(&self, sql: &str) -> DbResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(sql)
            .map_err(|e| DbError::Execution(e.to_string()))
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    fn list_tables_sync(&self) -> DbResult<Vec<String>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(LIST_TABLES_SQL)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    fn table_schema_sync(&self, table: &str) -> DbResult<String> {
        let conn = self.lock()?;
        let sql = conn
            .query_row(TABLE_SCHEMA_SQL, [table], |row| row.get::<_, Option<String>>(0))
            .optional()?;
        Ok(sql.flatten().unwrap_or_default())
    }

    fn scan_table_sync(&self, table: &str, sink: &mut dyn RowSink) -> DbResult<()> {
        let conn = self.lock()?;
        let sql = format!("select * from {}", quote_identifier(table));
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DbError::Execution(format!("{}: {}", e, sql)))?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        sink.columns(&columns)?;

        let mut rows = stmt.query([])?;
        let mut values = Vec::with_capacity(columns.len());
        while let Some(row) = rows.next()? {
            values.clear();
            for idx in 0..columns.len() {
                values.push(Value::from(row.get_ref(idx)?));
            }
            sink.row(&values)?;
        }
        Ok(())
    }
}

/// Quote a table name for interpolation into SQL
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[async_trait]
impl Database for SqliteBackend {
    async fn list_tables(&self) -> DbResult<Vec<String>> {
        self.list_tables_sync()
    }

    async fn table_schema(&self, table: &str) -> DbResult<String> {
        self.table_schema_sync(table)
    }

    async fn scan_table(&self, table: &str, sink: &mut dyn RowSink) -> DbResult<()> {
        self.scan_table_sync(table, sink)
    }

    fn db_type(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;
