use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{Result, TwigError};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized(PathBuf),
    AlreadyExists(PathBuf),
}

impl Repository {
    pub async fn init(&mut self) -> Result<InitOutcome> {
        fs::create_dir_all(self.path()).map_err(|e| TwigError::io(self.path(), e))?;
        let root = self
            .path()
            .canonicalize()
            .map_err(|e| TwigError::io(self.path(), e))?;
        let repository_path = self.repository_path();

        if repository_path.exists() {
            writeln!(self.writer(), "Repository already exists.")?;
            return Ok(InitOutcome::AlreadyExists(repository_path));
        }

        let commits_path = self.commits().path().to_path_buf();
        fs::create_dir_all(&commits_path).map_err(|e| TwigError::io(&commits_path, e))?;

        let staging = self.staging();
        let staging = staging.lock().await;
        fs::create_dir_all(staging.path()).map_err(|e| TwigError::io(staging.path(), e))?;

        let default_branch = BranchName::default_branch();
        self.head().write(&default_branch)?;
        self.set_current_branch(Some(default_branch));

        let display_path = root.join(repository_path.file_name().unwrap_or_default());
        info!(path = %display_path.display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty Twig repository in {}",
            display_path.display()
        )?;

        Ok(InitOutcome::Initialized(repository_path))
    }
}
