use crate::common::command::{init_repository_dir, read_head, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_twice_reports_existing_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head_path = init_repository_dir.path().join(".twig").join("HEAD");
    std::fs::write(&head_path, "develop")?;

    run_twig_command(init_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Repository already exists.\n"));

    // the existing state is left alone
    assert_eq!(read_head(init_repository_dir.path()), "develop");

    Ok(())
}

#[rstest]
fn init_over_a_corrupt_head_reports_existing_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head_path = init_repository_dir.path().join(".twig").join("HEAD");
    std::fs::write(&head_path, "bad..name")?;

    run_twig_command(init_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Repository already exists.\n"));

    // other commands still refuse the invalid branch name
    run_twig_command(init_repository_dir.path(), &["commit"])
        .assert()
        .failure()
        .code(3);

    Ok(())
}
