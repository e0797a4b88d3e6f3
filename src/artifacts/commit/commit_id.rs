//! Commit identifiers
//!
//! Ids look like `master_20240102030405123456`: the branch the commit was
//! created on, an underscore, and the creation time down to the microsecond.
//! Branch names may themselves contain underscores, so parsing always splits
//! on the last one.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::commit::{COMMIT_ID_SEPARATOR, READABLE_TIMESTAMP_FORMAT, TIMESTAMP_FORMAT};
use crate::errors::{Result, TwigError};
use chrono::{NaiveDateTime, SubsecRound, TimeDelta};

const TIMESTAMP_DIGITS: usize = 20;

/// Identifier of a single commit
///
/// Ordering compares the timestamp first, so sorting ids sorts history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId {
    timestamp: NaiveDateTime,
    branch: BranchName,
}

impl CommitId {
    pub fn new(branch: BranchName, timestamp: NaiveDateTime) -> Self {
        CommitId {
            timestamp: timestamp.trunc_subsecs(6),
            branch,
        }
    }

    /// Build the id for a new commit on `branch`
    ///
    /// Uses `now` unless the branch already holds a commit at or after that
    /// instant, in which case the id lands one microsecond past the newest
    /// one. This keeps ids unique and strictly increasing within a branch
    /// even when commits are made faster than the clock ticks.
    pub fn next(branch: BranchName, now: NaiveDateTime, latest: Option<&CommitId>) -> Self {
        let now = now.trunc_subsecs(6);
        let timestamp = match latest {
            Some(latest) if latest.timestamp >= now => {
                latest.timestamp + TimeDelta::microseconds(1)
            }
            _ => now,
        };

        CommitId::new(branch, timestamp)
    }

    pub fn try_parse(id: &str) -> Result<Self> {
        let invalid = || TwigError::InvalidCommitId(id.to_string());

        let (branch, timestamp) = id.rsplit_once(COMMIT_ID_SEPARATOR).ok_or_else(invalid)?;
        if timestamp.len() != TIMESTAMP_DIGITS || !timestamp.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let branch = BranchName::try_parse(branch).map_err(|_| invalid())?;
        let timestamp =
            NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|_| invalid())?;

        Ok(CommitId::new(branch, timestamp))
    }

    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(READABLE_TIMESTAMP_FORMAT).to_string()
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.branch,
            COMMIT_ID_SEPARATOR,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}
