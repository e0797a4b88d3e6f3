use crate::areas::commits::CommitStore;
use crate::areas::head::Head;
use crate::areas::locator::RepositoryLocator;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{Result, TwigError};
use std::cell::{Ref, RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the directory holding all repository state
pub const REPOSITORY_DIR: &str = ".twig";
pub const STAGING_DIR: &str = "staging";
pub const COMMITS_DIR: &str = "commits";
pub const HEAD_FILE: &str = "HEAD";

pub struct Repository {
    /// Working directory root; the repository state lives in `<path>/.twig`
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: Arc<Mutex<StagingArea>>,
    commits: CommitStore,
    head: Head,
    workspace: Workspace,
    /// In-memory copy of `HEAD`, loaded by `open` and kept in sync by init and checkout
    current_branch: RefCell<Option<BranchName>>,
}

impl Repository {
    /// Repository rooted at `path`
    ///
    /// Nothing has to exist yet and nothing is read; `init` creates the
    /// layout. Use [`Repository::open`] to work with an existing repository.
    pub fn new(path: impl Into<PathBuf>, writer: Box<dyn std::io::Write>) -> Self {
        let path = path.into();
        let repository_path = path.join(REPOSITORY_DIR);

        let staging = StagingArea::new(repository_path.join(STAGING_DIR).into_boxed_path());
        let commits = CommitStore::new(repository_path.join(COMMITS_DIR).into_boxed_path());
        let head = Head::new(repository_path.join(HEAD_FILE).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging: Arc::new(Mutex::new(staging)),
            commits,
            head,
            workspace,
            current_branch: RefCell::new(None),
        }
    }

    /// Existing repository rooted at `path`, with the current branch loaded
    /// from `HEAD`
    pub fn open(path: impl Into<PathBuf>, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let repository = Self::new(path, writer);
        let current_branch = repository.head().read()?;
        repository.set_current_branch(current_branch);

        Ok(repository)
    }

    /// Open the repository enclosing `start`
    ///
    /// Fails with [`TwigError::NotARepository`] before anything is read or
    /// written when the locator comes back empty-handed.
    pub fn discover(
        start: &Path,
        locator: &dyn RepositoryLocator,
        writer: Box<dyn std::io::Write>,
    ) -> Result<Self> {
        let root = locator
            .locate(start)
            .ok_or_else(|| TwigError::NotARepository(start.to_path_buf()))?;

        Self::open(root, writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> Arc<Mutex<StagingArea>> {
        self.staging.clone()
    }

    pub fn commits(&self) -> &CommitStore {
        &self.commits
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn current_branch(&self) -> Ref<'_, Option<BranchName>> {
        self.current_branch.borrow()
    }

    pub fn set_current_branch(&self, branch: Option<BranchName>) {
        *self.current_branch.borrow_mut() = branch;
    }
}
