use derive_new::new;
use filetime::FileTime;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }

    std::fs::write(&file_spec.path, &file_spec.content).expect("Failed to write file");
}

/// Pin a file's mtime so signature comparisons don't depend on how fast
/// the test ran.
pub fn set_mtime(path: &Path, unix_seconds: i64) {
    filetime::set_file_mtime(path, FileTime::from_unix_time(unix_seconds, 0))
        .expect("Failed to set file mtime");
}
