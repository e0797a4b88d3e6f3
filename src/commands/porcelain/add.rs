use crate::areas::repository::Repository;
use crate::errors::{Result, TwigError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// What happened to one path handed to `add`
#[derive(Debug)]
pub enum AddOutcome {
    Staged { path: PathBuf, name: String },
    Skipped { path: PathBuf, reason: TwigError },
}

impl Repository {
    /// Stage each path in turn
    ///
    /// Missing paths, non-files, non-UTF-8 names and the staged copies
    /// themselves are reported and skipped; the remaining paths are still
    /// staged. Only I/O failures abort the command.
    pub async fn add<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<Vec<AddOutcome>> {
        let staging = self.staging();
        let staging = staging.lock().await;

        let mut outcomes = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();

            match staging.stage(path) {
                Ok(name) => {
                    writeln!(
                        self.writer(),
                        "Added '{}' to the staging area.",
                        path.display()
                    )?;
                    outcomes.push(AddOutcome::Staged {
                        path: path.to_path_buf(),
                        name,
                    });
                }
                Err(
                    reason @ (TwigError::NotFound(_)
                    | TwigError::NotAFile(_)
                    | TwigError::InvalidFileName(_)
                    | TwigError::AlreadyStaged(_)),
                ) => {
                    let detail = match &reason {
                        TwigError::NotFound(_) => "File does not exist.",
                        TwigError::InvalidFileName(_) => "File name is not valid UTF-8.",
                        TwigError::AlreadyStaged(_) => "File is already staged.",
                        _ => "Not a regular file.",
                    };
                    warn!(path = %path.display(), "{reason}");
                    writeln!(self.writer(), "Skipping '{}' - {}", path.display(), detail)?;
                    outcomes.push(AddOutcome::Skipped {
                        path: path.to_path_buf(),
                        reason,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(outcomes)
    }
}
