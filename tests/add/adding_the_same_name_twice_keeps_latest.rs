use crate::common::command::{init_repository_dir, list_staged, run_twig_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_the_same_name_twice_keeps_latest(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a").join("x.txt"), "first".to_string()));
    write_file(FileSpec::new(dir.join("b").join("x.txt"), "second".to_string()));

    run_twig_command(dir, &["add", "a/x.txt"]).assert().success();
    run_twig_command(dir, &["add", "b/x.txt"]).assert().success();

    assert_eq!(list_staged(dir), vec!["x.txt"]);
    assert_eq!(
        read_file(&dir.join(".twig").join("staging").join("x.txt")),
        "second"
    );

    Ok(())
}
