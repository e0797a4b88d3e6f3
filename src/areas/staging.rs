//! Staging area
//!
//! A flat directory of file copies waiting for the next commit. Entries are
//! keyed by base name only, so adding `a/x.txt` and then `b/x.txt` leaves a
//! single `x.txt` holding the second file's content.

use crate::errors::{Result, TwigError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct StagingArea {
    /// Path to the staging directory (typically `.twig/staging`)
    path: Box<Path>,
}

impl StagingArea {
    pub fn new(path: Box<Path>) -> Self {
        StagingArea { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy `file_path` into the staging area under its base name
    ///
    /// Returns the name the file was staged under. These leave the staging
    /// area untouched:
    /// - a missing path yields [`TwigError::NotFound`]
    /// - anything other than a regular file yields [`TwigError::NotAFile`]
    /// - a base name that is not valid UTF-8 yields [`TwigError::InvalidFileName`]
    /// - a path that already is the staged copy yields [`TwigError::AlreadyStaged`]
    pub fn stage(&self, file_path: &Path) -> Result<String> {
        let metadata = match std::fs::metadata(file_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TwigError::NotFound(file_path.to_path_buf()));
            }
            Err(e) => return Err(TwigError::io(file_path, e)),
        };

        if !metadata.is_file() {
            return Err(TwigError::NotAFile(file_path.to_path_buf()));
        }

        let name = file_path
            .file_name()
            .ok_or_else(|| TwigError::NotAFile(file_path.to_path_buf()))?
            .to_str()
            .ok_or_else(|| TwigError::InvalidFileName(file_path.to_path_buf()))?
            .to_string();
        let target = self.path.join(&name);

        // copying a file onto itself truncates it
        if is_same_file(file_path, &target)? {
            return Err(TwigError::AlreadyStaged(file_path.to_path_buf()));
        }

        std::fs::copy(file_path, &target).map_err(|e| TwigError::io(&target, e))?;
        debug!(source = %file_path.display(), name = %name, "staged file");

        Ok(name)
    }

    /// Staged files keyed by name
    pub fn files(&self) -> Result<BTreeMap<String, PathBuf>> {
        let entries = std::fs::read_dir(&self.path).map_err(|e| TwigError::io(self.path(), e))?;

        let mut files = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| TwigError::io(self.path(), e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => {
                    files.insert(name, path);
                }
                Err(name) => warn!(
                    entry = %name.to_string_lossy(),
                    "ignoring staged file with a name that is not valid UTF-8"
                ),
            }
        }

        Ok(files)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.files()?.is_empty())
    }

    /// Drop everything staged and leave an empty staging directory behind
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_dir_all(&self.path).map_err(|e| TwigError::io(self.path(), e))?;
        }
        std::fs::create_dir_all(&self.path).map_err(|e| TwigError::io(self.path(), e))?;

        Ok(())
    }
}

fn is_same_file(source: &Path, target: &Path) -> Result<bool> {
    if !target.exists() {
        return Ok(false);
    }

    let source = source.canonicalize().map_err(|e| TwigError::io(source, e))?;
    let target = target.canonicalize().map_err(|e| TwigError::io(target, e))?;

    Ok(source == target)
}
