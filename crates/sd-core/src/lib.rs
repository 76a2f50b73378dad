//! sd-core - Core library for sqlite-diffable
//!
//! This crate validates the input and output paths, resolves which tables to
//! export, and writes each table as a `<table>.metadata.json` /
//! `<table>.ndjson` pair.

pub mod error;
pub mod export;
pub mod paths;
pub mod selector;

pub use error::{CoreError, CoreResult};
pub use export::{export_table, export_tables, ExportSummary, TableMetadata};
pub use paths::{prepare_output_dir, validate_database_path};
pub use selector::{check_usage, select_tables};
