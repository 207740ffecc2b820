//! Error types for project generation

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Generation error type
///
/// Every variant is fatal to a run. The `Display` output is what the CLI
/// prints before exiting with status 1.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Path does not exist
    #[error("<{}> doesn't exist.", .0.display())]
    NotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("<{}> is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    /// Project name contains characters outside `[A-Za-z0-9_-]`
    #[error("Project name may only include letters, numbers, underscores and hyphens.")]
    InvalidProjectName(String),

    /// Template choice is not a child of the template root
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Template root has no entries to choose from
    #[error("<{}> contains no templates.", .0.display())]
    NoTemplates(PathBuf),

    /// Filesystem operation failed
    #[error("{}: {source}", .path.display())]
    Io {
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Template rendering failed
    #[error("Failed to render <{}>: {source}", .path.display())]
    Render {
        /// Template file being rendered
        path: PathBuf,
        /// Underlying handlebars error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl GenerateError {
    /// Build a [`GenerateError::Io`] for `path`
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result alias for generation operations
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
