//! sd-db - Database abstraction layer for sqlite-diffable
//!
//! This crate provides the `Database` trait and its SQLite implementation,
//! plus the `Value` type used to carry row cells out of the database.

pub mod error;
pub mod sqlite;
pub mod traits;
pub mod value;

pub use error::{DbError, DbResult};
pub use sqlite::SqliteBackend;
pub use traits::{Database, RowSink};
pub use value::Value;
