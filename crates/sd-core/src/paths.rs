//! Input and output path validation

use crate::error::{CoreError, CoreResult};
use std::fs;
use std::io;
use std::path::Path;

/// Check that `path` names an existing file (not a directory).
pub fn validate_database_path(path: &Path) -> CoreResult<()> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CoreError::NotFound {
                path: path.display().to_string(),
            })
        }
        Err(e) => return Err(CoreError::io(path, e)),
    };

    if metadata.is_dir() {
        return Err(CoreError::InvalidPath {
            path: path.display().to_string(),
            reason: "Path should be a file",
        });
    }

    Ok(())
}

/// Make sure `output` is a directory, creating it (and its parents) if missing.
pub fn prepare_output_dir(output: &Path) -> CoreResult<()> {
    match fs::metadata(output) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CoreError::InvalidPath {
            path: output.display().to_string(),
            reason: "Output should be a directory",
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(output).map_err(|e| CoreError::io(output, e))?;
            log::debug!("Created output directory {}", output.display());
            Ok(())
        }
        Err(e) => Err(CoreError::io(output, e)),
    }
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
