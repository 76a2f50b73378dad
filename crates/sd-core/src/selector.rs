//! Table selection
//!
//! Resolves the tables to export from the `--all` flag, the table names given
//! on the command line, and the tables that actually exist in the catalog.

use crate::error::{CoreError, CoreResult};
use std::collections::HashSet;

const USAGE_MESSAGE: &str = "You must pass --all or specify some tables";

/// Fail unless `--all` was given or at least one table was requested.
pub fn check_usage(all: bool, requested: &[String]) -> CoreResult<()> {
    if !all && requested.is_empty() {
        return Err(CoreError::Usage(USAGE_MESSAGE.to_string()));
    }
    Ok(())
}

/// Resolve the tables to export.
///
/// With `all`, every table of `available` is returned in catalog order.
/// Otherwise the requested names that exist in `available` are returned in
/// the order they were requested; unknown names are dropped and duplicates
/// are kept once.
pub fn select_tables(
    all: bool,
    requested: &[String],
    available: &[String],
) -> CoreResult<Vec<String>> {
    check_usage(all, requested)?;

    if all {
        return Ok(available.to_vec());
    }

    let existing: HashSet<&str> = available.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    let mut selected = Vec::new();

    for name in requested {
        if !existing.contains(name.as_str()) {
            log::debug!("Skipping unknown table '{}'", name);
            continue;
        }
        if seen.insert(name.as_str()) {
            selected.push(name.clone());
        }
    }

    Ok(selected)
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;
