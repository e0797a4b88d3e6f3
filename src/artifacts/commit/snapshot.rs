use crate::artifacts::commit::commit_id::CommitId;
use derive_new::new;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A commit as found on disk: its id, its directory and the files in it
/// keyed by file name.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitSnapshot {
    id: CommitId,
    path: PathBuf,
    files: BTreeMap<String, PathBuf>,
}

impl CommitSnapshot {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn files(&self) -> &BTreeMap<String, PathBuf> {
        &self.files
    }
}
