//! Commit store
//!
//! Every branch owns a directory under `.twig/commits` holding one
//! sub-directory per commit:
//!
//! ```text
//! commits/
//!     master/
//!         master_20240102030405123456/
//!             notes.txt
//!     develop/
//!         master_20240102030405123456/   (inherited when develop was forked)
//!         develop_20240102040506000001/
//! ```
//!
//! Commits are only ever added. Forking a branch copies the source branch's
//! whole history directory once; after that the two grow independently.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::commit::commit_id::CommitId;
use crate::artifacts::commit::snapshot::CommitSnapshot;
use crate::errors::{Result, TwigError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct CommitStore {
    /// Path to the commits directory (typically `.twig/commits`)
    path: Box<Path>,
}

impl CommitStore {
    pub fn new(path: Box<Path>) -> Self {
        CommitStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn branch_path(&self, branch: &BranchName) -> PathBuf {
        self.path.join(branch.as_ref())
    }

    pub fn has_branch(&self, branch: &BranchName) -> bool {
        self.branch_path(branch).is_dir()
    }

    /// Branches that have a history directory, sorted by name
    pub fn branches(&self) -> Result<Vec<BranchName>> {
        let entries = std::fs::read_dir(&self.path).map_err(|e| TwigError::io(self.path(), e))?;

        let mut branches = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TwigError::io(self.path(), e))?;
            if !entry.path().is_dir() {
                continue;
            }

            let name = entry.file_name();
            match name.to_str().map(BranchName::try_parse) {
                Some(Ok(branch)) => branches.push(branch),
                _ => warn!(
                    entry = %name.to_string_lossy(),
                    "ignoring unexpected entry in commit store"
                ),
            }
        }
        branches.sort();

        Ok(branches)
    }

    /// Give `target` its own history directory
    ///
    /// The history of `source` is copied over when it exists; otherwise the
    /// new directory starts empty.
    pub fn fork_branch(&self, source: Option<&BranchName>, target: &BranchName) -> Result<()> {
        let target_path = self.branch_path(target);

        match source.filter(|source| *source != target && self.has_branch(source)) {
            Some(source) => {
                debug!(from = %source, to = %target, "forking branch history");
                copy_tree(&self.branch_path(source), &target_path)
            }
            None => {
                debug!(branch = %target, "creating empty branch history");
                std::fs::create_dir_all(&target_path).map_err(|e| TwigError::io(&target_path, e))
            }
        }
    }

    /// Create the empty directory for a new commit
    ///
    /// Fails instead of reusing a directory that already exists, so an id
    /// can never point at two different snapshots.
    pub fn create_commit(&self, id: &CommitId) -> Result<PathBuf> {
        let branch_path = self.branch_path(id.branch());
        std::fs::create_dir_all(&branch_path).map_err(|e| TwigError::io(&branch_path, e))?;

        let commit_path = branch_path.join(id.to_string());
        std::fs::create_dir(&commit_path).map_err(|e| TwigError::io(&commit_path, e))?;

        Ok(commit_path)
    }

    /// All commits in the history of `branch`, oldest first
    pub fn history(&self, branch: &BranchName) -> Result<Vec<CommitSnapshot>> {
        let branch_path = self.branch_path(branch);
        if !branch_path.is_dir() {
            return Ok(Vec::new());
        }

        let entries =
            std::fs::read_dir(&branch_path).map_err(|e| TwigError::io(&branch_path, e))?;

        let mut snapshots = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TwigError::io(&branch_path, e))?;
            let path = entry.path();
            let name = entry.file_name();

            let id = match name.to_str().map(CommitId::try_parse) {
                Some(Ok(id)) if path.is_dir() => id,
                _ => {
                    warn!(
                        branch = %branch,
                        entry = %name.to_string_lossy(),
                        "ignoring entry that is not a commit"
                    );
                    continue;
                }
            };

            snapshots.push(CommitSnapshot::new(id, path.clone(), list_files(&path)?));
        }
        snapshots.sort_by(|a, b| a.id().cmp(b.id()));

        Ok(snapshots)
    }

    pub fn latest(&self, branch: &BranchName) -> Result<Option<CommitId>> {
        Ok(self
            .history(branch)?
            .into_iter()
            .map(|snapshot| snapshot.id().clone())
            .max())
    }
}

fn list_files(dir: &Path) -> Result<BTreeMap<String, PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| TwigError::io(dir, e))?;

    let mut files = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| TwigError::io(dir, e))?;
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
                "ignoring file with a name that is not valid UTF-8"
            ),
        }
    }

    Ok(files)
}

fn copy_tree(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| TwigError::io(source, e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| TwigError::io(entry.path(), std::io::Error::other(e)))?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&destination).map_err(|e| TwigError::io(&destination, e))?;
        } else {
            std::fs::copy(entry.path(), &destination)
                .map_err(|e| TwigError::io(&destination, e))?;
        }
    }

    Ok(())
}
