//! Recursive template materialization
//!
//! Mirrors a template directory into a destination directory. Files are
//! rendered through the [`Renderer`] and directories are created and
//! recursed into. There is no rollback: the first failure aborts the walk
//! and leaves whatever was already written in place.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{GenerateError, Result};
use crate::render::Renderer;
use crate::template::{read_entries, EntryKind};
use crate::validate::validate_dir;

/// Copies a template tree into a destination, rendering file contents
#[derive(Default)]
pub struct Materializer {
    renderer: Renderer,
}

impl Materializer {
    /// Create a materializer using the given renderer
    #[must_use]
    pub const fn new(renderer: Renderer) -> Self {
        Self { renderer }
    }

    /// Mirror `template_dir` into `dest_dir`, rendering files with `project_name`
    ///
    /// Both directories are validated on every level of the recursion.
    /// Entries are processed in file name order. Existing files in
    /// `dest_dir` are overwritten, but a subdirectory that already exists
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either directory is missing or not a directory
    /// - The template directory cannot be listed
    /// - A file cannot be read, rendered or written
    /// - A subdirectory cannot be created
    pub fn materialize(&self, template_dir: &Path, dest_dir: &Path, project_name: &str) -> Result<()> {
        validate_dir(template_dir)?;
        validate_dir(dest_dir)?;

        for entry in read_entries(template_dir)? {
            let target = dest_dir.join(&entry.name);

            match entry.kind {
                EntryKind::File => {
                    let contents = self.renderer.render_file(&entry.path, project_name)?;
                    fs::write(&target, contents).map_err(|err| GenerateError::io(&target, err))?;
                    debug!(path = %target.display(), "rendered file");
                }
                EntryKind::Directory => {
                    fs::create_dir(&target).map_err(|err| GenerateError::io(&target, err))?;
                    debug!(path = %target.display(), "created directory");
                    self.materialize(&entry.path, &target, project_name)?;
                }
                EntryKind::Other => {
                    warn!(path = %entry.path.display(), "skipping entry that is neither a file nor a directory");
                }
            }
        }

        Ok(())
    }
}

/// Mirror `template_dir` into `dest_dir` with a default [`Materializer`]
///
/// # Errors
///
/// See [`Materializer::materialize`].
pub fn materialize(template_dir: &Path, dest_dir: &Path, project_name: &str) -> Result<()> {
    Materializer::default().materialize(template_dir, dest_dir, project_name)
}
