use crate::common::command::{
    init_repository_dir, list_commits, list_staged, run_twig_command,
};
use crate::common::file::{read_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_moves_staged_files_into_new_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let files = write_generated_files(dir, 3);
    let mut args = vec!["add".to_string()];
    args.extend(
        files
            .iter()
            .map(|file| file.path.file_name().unwrap().to_string_lossy().to_string()),
    );
    let args = args.iter().map(String::as_str).collect::<Vec<_>>();
    run_twig_command(dir, &args).assert().success();

    let output = run_twig_command(dir, &["commit"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Committed changes to branch 'master' with commit ID: master_\d{20}\.\n$",
        )?)
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    let commits = list_commits(dir, "master");
    assert_eq!(commits.len(), 1);
    assert!(output.contains(&commits[0]));
    assert!(list_staged(dir).is_empty());

    let commit_dir = dir.join(".twig").join("commits").join("master").join(&commits[0]);
    for file in &files {
        let name = file.path.file_name().unwrap();
        assert_eq!(read_file(&commit_dir.join(name)), file.content);
    }

    Ok(())
}

#[rstest]
fn successive_commits_get_distinct_increasing_ids(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    for round in 0..3 {
        std::fs::write(dir.join("a.txt"), format!("round {round}"))?;
        run_twig_command(dir, &["add", "a.txt"]).assert().success();
        run_twig_command(dir, &["commit"]).assert().success();
    }

    let commits = list_commits(dir, "master");
    assert_eq!(commits.len(), 3);
    // names share the branch prefix, so lexical order is timestamp order
    let latest = dir.join(".twig").join("commits").join("master").join(&commits[2]);
    assert_eq!(read_file(&latest.join("a.txt")), "round 2");

    Ok(())
}
