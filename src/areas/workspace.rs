//! Working directory
//!
//! Checkout does not patch the working directory, it rebuilds it: every file
//! outside `.twig` is deleted and the desired file set is copied back in.
//! Directories are left in place, even when emptied.

use crate::areas::repository::REPOSITORY_DIR;
use crate::artifacts::checkout::file_set::FileSet;
use crate::errors::{Result, TwigError};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// What to do when a file of the same name is already in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializePolicy {
    Overwrite,
    KeepExisting,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_repository_dir(&self, path: &Path) -> bool {
        path.parent() == Some(self.path.as_ref())
            && path.file_name().is_some_and(|name| name == REPOSITORY_DIR)
    }

    /// Every non-directory entry below the root, skipping `.twig`
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| !self.is_repository_dir(entry.path()));
        for entry in walker {
            let entry = entry.map_err(|e| TwigError::io(self.path(), e.into()))?;
            if !entry.file_type().is_dir() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Delete every file in the working directory; returns how many
    pub fn clear_files(&self) -> Result<usize> {
        let files = self.list_files()?;

        for file in &files {
            std::fs::remove_file(file).map_err(|e| TwigError::io(file, e))?;
            debug!(file = %file.display(), "removed from working directory");
        }

        Ok(files.len())
    }

    /// Copy each file of `files` into the root under its name
    ///
    /// Returns how many files were written.
    pub fn materialize(&self, files: &FileSet, policy: MaterializePolicy) -> Result<usize> {
        let mut written = 0;

        for (name, source) in files {
            let target = self.path.join(name);
            if policy == MaterializePolicy::KeepExisting && target.exists() {
                debug!(file = %name, "already present, keeping it");
                continue;
            }

            std::fs::copy(source.path(), &target).map_err(|e| TwigError::io(&target, e))?;
            debug!(file = %name, source = %source.path().display(), "restored");
            written += 1;
        }

        Ok(written)
    }
}
