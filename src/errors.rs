//! Error types surfaced by repository operations
//!
//! Conditions the user is merely informed about (an empty commit, a repeated
//! `init`) are modelled as outcomes on the command results instead. Anything
//! in here either skips a single item handed to `add` (`NotFound`,
//! `NotAFile`, `InvalidFileName`, `AlreadyStaged`) or aborts the whole
//! command.

use std::{io, path::PathBuf, result::Result as StdResult};
use thiserror::Error;

/// Result type for twig operations.
pub type Result<T> = StdResult<T, TwigError>;

#[derive(Error, Debug)]
pub enum TwigError {
    /// A file handed to `add` does not exist.
    #[error("'{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// A path handed to `add` exists but is not a regular file.
    #[error("'{}' is not a regular file", .0.display())]
    NotAFile(PathBuf),

    /// The base name of a path handed to `add` is not valid UTF-8.
    #[error("'{}' does not have a UTF-8 file name", .0.display())]
    InvalidFileName(PathBuf),

    /// The path handed to `add` is the staged copy itself.
    #[error("'{}' is already in the staging area", .0.display())]
    AlreadyStaged(PathBuf),

    /// No `.twig` directory was found from the starting directory upwards.
    #[error("not a twig repository (or any of the parent directories): {}", .0.display())]
    NotARepository(PathBuf),

    #[error("invalid branch name: '{0}'")]
    InvalidBranchName(String),

    #[error("invalid commit id: '{0}'")]
    InvalidCommitId(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Writing a report line to the output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// An underlying file-system call failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TwigError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TwigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code the CLI should report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotARepository(_) => 2,
            Self::InvalidBranchName(_) | Self::InvalidCommitId(_) => 3,
            _ => 1,
        }
    }
}
