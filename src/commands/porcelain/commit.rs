use crate::areas::repository::Repository;
use crate::artifacts::commit::commit_id::CommitId;
use crate::errors::{Result, TwigError};
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(CommitId),
    NothingToCommit,
    NoBranch,
}

impl Repository {
    /// Move everything staged into a new commit on the current branch
    ///
    /// Files are copied into the commit directory and removed from staging
    /// one at a time, then the staging directory is recreated empty. If a
    /// copy fails midway the partial commit and the files not yet moved are
    /// left where they are; the error says which path failed.
    pub async fn commit(&mut self) -> Result<CommitOutcome> {
        let staging = self.staging();
        let staging = staging.lock().await;

        let Some(branch) = self.current_branch().clone() else {
            writeln!(self.writer(), "No branch is currently checked out.")?;
            return Ok(CommitOutcome::NoBranch);
        };

        let staged = staging.files()?;
        if staged.is_empty() {
            writeln!(self.writer(), "No changes added to commit.")?;
            return Ok(CommitOutcome::NothingToCommit);
        }

        let latest = self.commits().latest(&branch)?;
        let commit_id = CommitId::next(
            branch.clone(),
            chrono::Local::now().naive_local(),
            latest.as_ref(),
        );
        let commit_path = self.commits().create_commit(&commit_id)?;

        for (name, staged_path) in &staged {
            let target = commit_path.join(name);
            std::fs::copy(staged_path, &target).map_err(|e| TwigError::io(&target, e))?;
            std::fs::remove_file(staged_path).map_err(|e| TwigError::io(staged_path, e))?;
            debug!(file = %name, commit = %commit_id, "committed file");
        }
        staging.clear()?;

        info!(commit = %commit_id, files = staged.len(), "created commit");
        writeln!(
            self.writer(),
            "Committed changes to branch '{}' with commit ID: {}.",
            branch.to_colored_name(),
            commit_id
        )?;

        Ok(CommitOutcome::Committed(commit_id))
    }
}
