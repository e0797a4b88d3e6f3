use crate::common::command::{repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn adding_outside_a_repository_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(repository_dir.path().join("a.txt"), "a")?;

    run_twig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a twig repository"));

    assert!(!repository_dir.path().join(".twig").exists());

    Ok(())
}
