use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

use common::command::{repository_dir, run_wit_command, stdout_of};
use common::file::{FileSpec, write_file};

#[rstest]
fn add_a_single_file_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>>
{
    let dir = repository_dir;
    write_file(FileSpec::new(dir.path().join("a.txt"), "one\n".to_string()));

    run_wit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join(".wit/staging/a.txt"))?,
        "one\n"
    );
    let stdout = stdout_of(&mut run_wit_command(dir.path(), &["status"]));
    assert!(stdout.contains("A a.txt"));

    Ok(())
}

#[rstest]
fn add_a_directory_recursively(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    write_file(FileSpec::new(
        dir.path().join("a/b/deep.txt"),
        "deep\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("a/shallow.txt"),
        "shallow\n".to_string(),
    ));

    run_wit_command(dir.path(), &["add", "a"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join(".wit/staging/a/b/deep.txt"))?,
        "deep\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join(".wit/staging/a/shallow.txt"))?,
        "shallow\n"
    );

    Ok(())
}

#[rstest]
fn add_resolves_paths_relative_to_the_invocation_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    write_file(FileSpec::new(
        dir.path().join("sub/inner.txt"),
        "inner\n".to_string(),
    ));

    run_wit_command(&dir.path().join("sub"), &["add", "inner.txt"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join(".wit/staging/sub/inner.txt"))?,
        "inner\n"
    );

    Ok(())
}

#[rstest]
fn adding_a_missing_path_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;

    run_wit_command(dir.path(), &["add", "ghost.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    Ok(())
}

#[rstest]
fn last_add_wins(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    write_file(FileSpec::new(dir.path().join("a.txt"), "first\n".to_string()));
    run_wit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "second\n".to_string(),
    ));
    run_wit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join(".wit/staging/a.txt"))?,
        "second\n"
    );

    Ok(())
}

#[rstest]
fn rm_removes_the_staged_and_working_copies(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    write_file(FileSpec::new(dir.path().join("a.txt"), "one\n".to_string()));
    run_wit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    run_wit_command(dir.path(), &["rm", "a.txt"])
        .assert()
        .success();

    assert!(!dir.path().join(".wit/staging/a.txt").exists());
    assert!(!dir.path().join("a.txt").exists());

    Ok(())
}

#[rstest]
fn rm_of_an_unstaged_file_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    write_file(FileSpec::new(dir.path().join("a.txt"), "one\n".to_string()));

    run_wit_command(dir.path(), &["rm", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no staged counterpart"));

    assert!(dir.path().join("a.txt").exists());

    Ok(())
}
