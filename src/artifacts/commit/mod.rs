//! Commits and their identifiers
//!
//! A commit is a directory under `.twig/commits/<branch>/` named after its
//! [`commit_id::CommitId`], holding plain copies of every file that was
//! staged when it was created.

pub mod commit_id;
pub mod snapshot;

/// Timestamp layout embedded in commit ids (20 digits, microseconds).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%6f";

/// Timestamp layout used when printing the history.
pub const READABLE_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.6f %d-%m-%Y";

pub const COMMIT_ID_SEPARATOR: char = '_';
