//! Repository discovery
//!
//! The porcelain commands never search for a repository themselves; the
//! binary resolves the root up front through a [`RepositoryLocator`] and
//! hands the result to [`crate::areas::repository::Repository::discover`].

use crate::areas::repository::REPOSITORY_DIR;
use std::path::{Path, PathBuf};

pub trait RepositoryLocator {
    /// Working directory root of the repository enclosing `start`, if any
    fn locate(&self, start: &Path) -> Option<PathBuf>;
}

/// Walks from the start directory up through its ancestors looking for a
/// `.twig` directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerLocator;

impl RepositoryLocator for MarkerLocator {
    fn locate(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(REPOSITORY_DIR).is_dir())
            .map(Path::to_path_buf)
    }
}
