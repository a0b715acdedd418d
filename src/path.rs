use crate::error::{BalanceError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

// Function to turn a user supplied path into a canonical absolute one
#[instrument]
pub fn resolve(input: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(input).map_err(|source| BalanceError::NotFound {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("Resolved {} to {}", input.display(), resolved.display());
    Ok(resolved)
}

// Function to get the last component of a path for display
pub fn file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
