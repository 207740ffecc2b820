//! Input validation for destinations, template roots and project names

use std::fs;
use std::path::Path;

use crate::error::{GenerateError, Result};

/// Ensure `dir` exists and is a directory
///
/// Symlinks are followed, so a link to a directory is accepted.
///
/// # Errors
///
/// Returns [`GenerateError::NotFound`] if nothing exists at `dir`, or
/// [`GenerateError::NotADirectory`] if it exists but is something else.
pub fn validate_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(GenerateError::NotFound(dir.to_path_buf()));
    }

    let metadata = fs::metadata(dir).map_err(|err| GenerateError::io(dir, err))?;
    if !metadata.is_dir() {
        return Err(GenerateError::NotADirectory(dir.to_path_buf()));
    }

    Ok(())
}

/// Check that a project name only uses `[A-Za-z0-9_-]`
#[must_use]
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Validate a project name
///
/// # Errors
///
/// Returns [`GenerateError::InvalidProjectName`] if the name is empty or
/// contains anything besides ASCII letters, digits, `_` and `-`.
pub fn validate_project_name(name: &str) -> Result<()> {
    if is_valid_project_name(name) {
        Ok(())
    } else {
        Err(GenerateError::InvalidProjectName(name.to_string()))
    }
}
