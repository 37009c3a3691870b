use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    run_wit_command(dir.path(), &["init"]).assert().success();

    dir
}

pub fn run_wit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("wit").expect("Failed to find wit binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn wit_commit(dir: &Path, message: &str) -> Command {
    run_wit_command(dir, &["commit", "-m", message])
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("valid utf-8 output")
}

fn read_references(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join(".wit").join("references"))
        .expect("references table exists")
        .lines()
        .map(String::from)
        .collect()
}

/// Value of the first table line carrying the given key, first match wins
pub fn read_ref(dir: &Path, name: &str) -> String {
    read_references(dir)
        .iter()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .unwrap_or_else(|| panic!("no {} entry in the references table", name))
}

pub fn read_head(dir: &Path) -> String {
    read_ref(dir, "HEAD")
}

pub fn read_activated(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".wit").join("activated")).expect("activated marker exists")
}

/// Names of the snapshot directories, in name order
pub fn snapshot_dirs(dir: &Path) -> Vec<String> {
    let mut dirs = std::fs::read_dir(dir.join(".wit").join("snapshots"))
        .expect("snapshots directory exists")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    dirs.sort();
    dirs
}

/// Parent recorded in a commit's metadata file, empty for a root commit
pub fn commit_parent(dir: &Path, id: &str) -> String {
    let metadata =
        std::fs::read_to_string(dir.join(".wit").join("snapshots").join(format!("{}.txt", id)))
            .expect("commit metadata exists");

    metadata
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("parent="))
        .expect("metadata starts with a parent line")
        .to_string()
}

/// Fabricate a root commit with no parent and register it as a branch,
/// producing a history disjoint from everything the engine created.
pub fn fabricate_orphan_branch(dir: &Path, branch: &str) -> String {
    let id = "f".repeat(40);
    let snapshots = dir.join(".wit").join("snapshots");

    std::fs::create_dir(snapshots.join(&id)).expect("create orphan snapshot");
    std::fs::write(snapshots.join(&id).join("orphan.txt"), "orphaned\n")
        .expect("write orphan snapshot file");
    std::fs::write(
        snapshots.join(format!("{}.txt", id)),
        "parent=\nWed Jun  9 04:26:40 2021 +0000\nmessage=orphan\n",
    )
    .expect("write orphan metadata");

    let references = dir.join(".wit").join("references");
    let mut table = std::fs::read_to_string(&references).expect("references table exists");
    table.push_str(&format!("{}={}\n", branch, id));
    std::fs::write(&references, table).expect("append orphan branch");

    id
}
