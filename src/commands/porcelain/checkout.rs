use crate::areas::repository::Repository;
use crate::areas::workspace::MaterializePolicy;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::file_set::FileSet;
use crate::errors::Result;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    pub branch: BranchName,
    pub previous: Option<BranchName>,
    /// Set when the target had no history and was forked from `previous`
    pub forked: bool,
    pub removed: usize,
    pub restored: usize,
}

impl Repository {
    /// Switch to `target`, creating it from the current branch if needed,
    /// and rebuild the working directory
    ///
    /// The working directory ends up holding exactly the staged files plus
    /// the target's effective file set, with staged copies taking priority.
    /// Each step runs to completion before the next; a failure part-way
    /// leaves the earlier steps applied and re-running the checkout finishes
    /// the job.
    pub async fn checkout(&mut self, target: &str) -> Result<CheckoutOutcome> {
        let target = BranchName::try_parse(target)?;

        let staging = self.staging();
        let staging = staging.lock().await;

        let previous = self.current_branch().clone();

        let forked = !self.commits().has_branch(&target);
        if forked {
            self.commits().fork_branch(previous.as_ref(), &target)?;
        }

        self.head().write(&target)?;
        self.set_current_branch(Some(target.clone()));

        let removed = self.workspace().clear_files()?;

        let staged = FileSet::from_staged(staging.files()?);
        let mut restored = self
            .workspace()
            .materialize(&staged, MaterializePolicy::Overwrite)?;

        let history = self.commits().history(&target)?;
        let effective = FileSet::effective(&history);
        restored += self
            .workspace()
            .materialize(&effective, MaterializePolicy::KeepExisting)?;

        info!(
            branch = %target,
            forked,
            removed,
            restored,
            commits = history.len(),
            "checked out branch"
        );

        if previous.as_ref() == Some(&target) {
            writeln!(self.writer(), "Already on '{}'.", target.to_colored_name())?;
        } else {
            writeln!(
                self.writer(),
                "Switched to branch '{}'.",
                target.to_colored_name()
            )?;
        }

        Ok(CheckoutOutcome {
            branch: target,
            previous,
            forked,
            removed,
            restored,
        })
    }
}
