//! Generator options
//!
//! There is no configuration file. Options come from the two positional
//! command-line arguments and the `LAMBDA_TEMPLATES_PATH` environment
//! variable. Empty values are treated as absent.

use std::path::PathBuf;

use crate::error::{GenerateError, Result};

/// Environment variable overriding the template root
pub const TEMPLATES_PATH_ENV: &str = "LAMBDA_TEMPLATES_PATH";

/// Template root shipped with the crate
#[must_use]
pub fn default_templates_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Inputs known before prompting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Directory to create the project in
    pub destination: Option<PathBuf>,
    /// Directory holding the templates
    pub templates_root: Option<PathBuf>,
    /// Pre-filled project name
    pub project_name: Option<String>,
}

impl GeneratorOptions {
    /// Build options from command-line values and the environment
    #[must_use]
    pub fn from_env(destination: Option<PathBuf>, project_name: Option<String>) -> Self {
        Self {
            destination,
            templates_root: std::env::var_os(TEMPLATES_PATH_ENV).map(PathBuf::from),
            project_name,
        }
        .normalized()
    }

    /// Drop empty values so they fall back to defaults
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            destination: self.destination.filter(|p| !p.as_os_str().is_empty()),
            templates_root: self.templates_root.filter(|p| !p.as_os_str().is_empty()),
            project_name: self.project_name.filter(|n| !n.is_empty()),
        }
    }

    /// Destination directory, defaulting to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if no destination was given and the current
    /// directory cannot be determined.
    pub fn destination(&self) -> Result<PathBuf> {
        match &self.destination {
            Some(path) => Ok(path.clone()),
            None => std::env::current_dir().map_err(|err| GenerateError::io(".", err)),
        }
    }

    /// Template root, defaulting to [`default_templates_root`]
    #[must_use]
    pub fn templates_root(&self) -> PathBuf {
        self.templates_root
            .clone()
            .unwrap_or_else(default_templates_root)
    }
}
