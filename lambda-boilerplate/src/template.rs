//! Template roots and template directory entries
//!
//! A template root is a directory whose immediate children are templates.
//! Each template is in turn a directory tree that gets mirrored into a new
//! project by the [`Materializer`](crate::Materializer).

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{GenerateError, Result};
use crate::validate::validate_dir;

/// Kind of a directory entry, with symlinks resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file, rendered and written
    File,
    /// Directory, created and recursed into
    Directory,
    /// Anything else (socket, fifo, dangling symlink)
    Other,
}

impl EntryKind {
    fn of(path: &Path) -> Result<Self> {
        // Follow symlinks, only a dangling link is reported as Other
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound && path.symlink_metadata().is_ok() => {
                return Ok(Self::Other)
            }
            Err(err) => return Err(GenerateError::io(path, err)),
        };

        Ok(if metadata.is_file() {
            Self::File
        } else if metadata.is_dir() {
            Self::Directory
        } else {
            Self::Other
        })
    }
}

/// A single immediate child of a directory
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// File name of the entry
    pub name: OsString,
    /// Full path of the entry
    pub path: PathBuf,
    /// What the entry is
    pub kind: EntryKind,
}

/// List the immediate entries of `dir`, sorted by file name
///
/// # Errors
///
/// Returns an error if the directory cannot be read or an entry cannot be
/// stat'ed.
pub fn read_entries(dir: &Path) -> Result<Vec<TemplateEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            GenerateError::io(path, err.into())
        })?;

        let path = entry.path().to_path_buf();
        let kind = EntryKind::of(&path)?;

        entries.push(TemplateEntry {
            name: entry.file_name().to_os_string(),
            path,
            kind,
        });
    }

    Ok(entries)
}

/// Directory holding one template per immediate child
#[derive(Debug, Clone)]
pub struct TemplateRoot {
    path: PathBuf,
}

impl TemplateRoot {
    /// Open a template root, checking that it is an existing directory
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NotFound`] or [`GenerateError::NotADirectory`]
    /// naming `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        validate_dir(&path)?;
        Ok(Self { path })
    }

    /// Path of the root directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the available templates, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be listed.
    pub fn choices(&self) -> Result<Vec<String>> {
        Ok(read_entries(&self.path)?
            .into_iter()
            .map(|entry| entry.name.to_string_lossy().into_owned())
            .collect())
    }

    /// Resolve a template choice to its directory
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::UnknownTemplate`] if `choice` is not one of
    /// [`choices`](Self::choices).
    pub fn template_path(&self, choice: &str) -> Result<PathBuf> {
        if self.choices()?.iter().any(|c| c == choice) {
            Ok(self.path.join(choice))
        } else {
            Err(GenerateError::UnknownTemplate(choice.to_string()))
        }
    }
}
