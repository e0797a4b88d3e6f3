use crate::common::command::{init_repository_dir, list_staged, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_file_is_skipped(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let valid_content = Words(5..10).fake::<Vec<String>>().join(" ");
    write_file(FileSpec::new(
        init_repository_dir.path().join("valid.txt"),
        valid_content,
    ));

    run_twig_command(
        init_repository_dir.path(),
        &["add", "missing.txt", "valid.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Skipping 'missing.txt' - File does not exist.",
    ))
    .stdout(predicate::str::contains(
        "Added 'valid.txt' to the staging area.",
    ));

    assert_eq!(list_staged(init_repository_dir.path()), vec!["valid.txt"]);

    Ok(())
}

#[rstest]
fn adding_only_missing_files_leaves_staging_empty(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(init_repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .success();

    assert!(list_staged(init_repository_dir.path()).is_empty());

    Ok(())
}

#[rstest]
fn adding_a_directory_is_skipped(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(init_repository_dir.path().join("docs"))?;

    run_twig_command(init_repository_dir.path(), &["add", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Skipping 'docs' - Not a regular file.",
        ));

    assert!(list_staged(init_repository_dir.path()).is_empty());

    Ok(())
}
