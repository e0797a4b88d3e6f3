use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const SAMPLE_FILE: &str = "sample.txt";
pub const SAMPLE_CONTENT: &str = "Sample content\n";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository with `sample.txt` committed once on master
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let sample = FileSpec::new(
        init_repository_dir.path().join(SAMPLE_FILE),
        SAMPLE_CONTENT.to_string(),
    );
    write_file(sample);

    run_twig_command(init_repository_dir.path(), &["add", SAMPLE_FILE])
        .assert()
        .success();
    run_twig_command(init_repository_dir.path(), &["commit"])
        .assert()
        .success();

    init_repository_dir
}

pub fn run_twig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("twig").expect("Failed to find twig binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("TWIG_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn twig_add_and_commit(dir: &Path, files: &[&str]) {
    let mut args = vec!["add"];
    args.extend_from_slice(files);
    run_twig_command(dir, &args).assert().success();
    run_twig_command(dir, &["commit"]).assert().success();
}

pub fn read_head(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".twig").join("HEAD"))
        .unwrap_or_else(|e| panic!("Failed to read HEAD in {:?}: {}", dir, e))
}

/// Commit directory names of a branch history, sorted
pub fn list_commits(dir: &Path, branch: &str) -> Vec<String> {
    list_names(&dir.join(".twig").join("commits").join(branch))
}

pub fn list_staged(dir: &Path) -> Vec<String> {
    list_names(&dir.join(".twig").join("staging"))
}

fn list_names(dir: &Path) -> Vec<String> {
    let mut names = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {:?}: {}", dir, e))
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .collect::<Vec<_>>();
    names.sort();
    names
}
