use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::commit::commit_id::CommitId;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Only list the history of this branch
    pub branch: Option<String>,
}

/// One line of `log` output: a commit as held by one branch history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub branch: BranchName,
    pub commit_id: CommitId,
}

impl Repository {
    /// Collect commits across branch histories, oldest first
    ///
    /// A commit inherited through a fork shows up once for every branch
    /// whose history holds a copy of it.
    pub fn log_entries(&self, opts: &LogOptions) -> Result<Vec<LogEntry>> {
        let branches = match &opts.branch {
            Some(name) => vec![BranchName::try_parse(name.as_str())?],
            None => self.commits().branches()?,
        };

        let mut entries = Vec::new();
        for branch in branches {
            for snapshot in self.commits().history(&branch)? {
                entries.push(LogEntry {
                    branch: branch.clone(),
                    commit_id: snapshot.id().clone(),
                });
            }
        }
        entries.sort_by(|a, b| {
            (a.commit_id.timestamp(), &a.branch).cmp(&(b.commit_id.timestamp(), &b.branch))
        });

        Ok(entries)
    }

    pub fn log(&self, opts: &LogOptions) -> Result<()> {
        let entries = self.log_entries(opts)?;

        writeln!(self.writer(), "Commit history:")?;
        if entries.is_empty() {
            writeln!(self.writer(), "No commits yet.")?;
        }

        for entry in &entries {
            writeln!(
                self.writer(),
                "- Timestamp: {}, Branch: {}, Commit ID: {}",
                entry.commit_id.readable_timestamp(),
                entry.branch.to_colored_name(),
                entry.commit_id.to_string().as_str().yellow()
            )?;
        }

        Ok(())
    }
}
