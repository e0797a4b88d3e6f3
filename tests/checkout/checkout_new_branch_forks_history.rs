use crate::common::command::{
    committed_repository_dir, list_commits, read_head, run_twig_command, twig_add_and_commit,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_new_branch_forks_history(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let master_commits = list_commits(dir, "master");

    run_twig_command(dir, &["checkout", "develop"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Switched to branch 'develop'.\n"));

    assert_eq!(read_head(dir), "develop");
    assert_eq!(list_commits(dir, "develop"), master_commits);

    // later commits on master stay on master
    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    std::fs::write(dir.join("later.txt"), "later")?;
    twig_add_and_commit(dir, &["later.txt"]);

    assert_eq!(list_commits(dir, "master").len(), 2);
    assert_eq!(list_commits(dir, "develop"), master_commits);

    Ok(())
}

#[rstest]
fn checkout_current_branch_reports_already_on(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(committed_repository_dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Already on 'master'.\n"));

    Ok(())
}

#[rstest]
fn checkout_with_invalid_branch_name_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    run_twig_command(dir, &["checkout", "feature/login"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("invalid branch name"));

    assert_eq!(read_head(dir), "master");
    assert!(dir.join("sample.txt").exists());

    Ok(())
}
