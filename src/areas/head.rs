//! The branch pointer
//!
//! `HEAD` is a one-line text file holding the name of the checked-out
//! branch. A missing or blank file means no branch is checked out.

use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{Result, TwigError};
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, new)]
pub struct Head {
    /// Path to the `HEAD` file
    path: Box<Path>,
}

impl Head {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Option<BranchName>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| TwigError::io(self.path(), e))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(BranchName::try_parse(content)?))
    }

    /// Overwrite `HEAD` under an exclusive lock
    pub fn write(&self, branch: &BranchName) -> Result<()> {
        let io_error = |e| TwigError::io(self.path(), e);

        let mut head_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(io_error)?;
        let mut lock = file_guard::lock(&mut head_file, Lock::Exclusive, 0, 1).map_err(io_error)?;
        lock.deref_mut()
            .write_all(branch.as_ref().as_bytes())
            .map_err(io_error)?;

        Ok(())
    }
}
