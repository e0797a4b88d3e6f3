//! Name-keyed sets of files to place in the working directory
//!
//! The effective file set of a branch is not its latest snapshot. Every
//! commit the branch history holds contributes, and for each file name the
//! copy from the newest commit wins. A file committed once keeps coming back
//! on checkout even if later commits never mention it.

use crate::artifacts::commit::commit_id::CommitId;
use crate::artifacts::commit::snapshot::CommitSnapshot;
use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::path::{Path, PathBuf};

/// Where a file in a [`FileSet`] is copied from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    /// Commit the copy comes from; `None` for staged files
    origin: Option<CommitId>,
}

impl SourceFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> Option<&CommitId> {
        self.origin.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: BTreeMap<String, SourceFile>,
}

impl FileSet {
    /// Files currently in the staging area, keyed by name
    pub fn from_staged<I>(staged: I) -> Self
    where
        I: IntoIterator<Item = (String, PathBuf)>,
    {
        let files = staged
            .into_iter()
            .map(|(name, path)| (name, SourceFile { path, origin: None }))
            .collect();

        FileSet { files }
    }

    /// Fold a branch history into its effective file set
    ///
    /// Snapshots are visited oldest first (ties broken by id) and every file
    /// overwrites whatever an older commit left under the same name.
    pub fn effective(snapshots: &[CommitSnapshot]) -> Self {
        let mut ordered = snapshots.iter().collect::<Vec<_>>();
        ordered.sort_by(|a, b| a.id().cmp(b.id()));

        let files = ordered
            .into_iter()
            .flat_map(|snapshot| {
                snapshot.files().iter().map(move |(name, path)| {
                    let source = SourceFile {
                        path: path.clone(),
                        origin: Some(snapshot.id().clone()),
                    };
                    (name.clone(), source)
                })
            })
            .fold(BTreeMap::new(), |mut files, (name, source)| {
                files.insert(name, source);
                files
            });

        FileSet { files }
    }

    pub fn get(&self, name: &str) -> Option<&SourceFile> {
        self.files.get(name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, SourceFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = (&'a String, &'a SourceFile);
    type IntoIter = Iter<'a, String, SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
