//! Working directory file system operations
//!
//! The workspace owns every traversal of the working tree and the shared
//! recursive-copy primitive used by staging, snapshot creation and checkout.
//! Copies preserve source mtimes: the change-signature comparison is
//! size+mtime, so a copy that reset timestamps would report every file as
//! changed.

use crate::areas::repository::METADATA_DIR;
use crate::error::WitError;
use anyhow::Context;
use derive_new::new;
use filetime::FileTime;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

/// Content signature used by all change detection: size plus mtime,
/// never byte-for-byte comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSignature {
    pub len: u64,
    pub mtime: SystemTime,
}

impl FileSignature {
    pub fn of(path: &Path) -> anyhow::Result<Self> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?;

        Ok(FileSignature {
            len: metadata.len(),
            mtime: metadata.modified()?,
        })
    }
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All files in the working tree as relative paths, excluding the
    /// metadata directory, in name order.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let files = WalkDir::new(self.path.as_ref())
            .into_iter()
            .filter_entry(|entry| !Self::is_metadata(entry.path()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .ok()
                    .map(PathBuf::from)
            })
            .collect::<BTreeSet<_>>();

        Ok(files.into_iter().collect())
    }

    /// Resolve a caller-supplied path (relative to the invocation directory)
    /// to a path relative to the workspace root. The path must exist.
    pub fn relativize(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let absolute = self.absolutize(path)?;
        let absolute = absolute
            .canonicalize()
            .map_err(|_| WitError::PathNotFound(path.to_path_buf()))?;

        absolute
            .strip_prefix(self.path.as_ref())
            .map(PathBuf::from)
            .map_err(|_| WitError::PathNotFound(path.to_path_buf()).into())
    }

    /// Like `relativize`, but the final path component does not have to
    /// exist. Used by remove, where the working-tree file may already be
    /// gone while its staged counterpart remains.
    pub fn relativize_unchecked(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let absolute = self.absolutize(path)?;

        let file_name = absolute
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| WitError::PathNotFound(path.to_path_buf()))?;
        let parent = absolute
            .parent()
            .ok_or_else(|| WitError::PathNotFound(path.to_path_buf()))?
            .canonicalize()
            .map_err(|_| WitError::PathNotFound(path.to_path_buf()))?;

        parent
            .join(file_name)
            .strip_prefix(self.path.as_ref())
            .map(PathBuf::from)
            .map_err(|_| WitError::PathNotFound(path.to_path_buf()).into())
    }

    fn absolutize(&self, path: &Path) -> anyhow::Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(std::env::current_dir()?.join(path))
        }
    }

    fn is_metadata(path: &Path) -> bool {
        path.components().any(|component| {
            matches!(component, std::path::Component::Normal(name) if name == METADATA_DIR)
        })
    }
}

/// Recursively copy a file or directory tree
///
/// Creates or overwrites files present in the source and never deletes
/// anything already under the destination.
pub fn copy_tree(source: &Path, destination: &Path) -> anyhow::Result<()> {
    if source.is_file() {
        return copy_file(source, destination);
    }

    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source)?;
        // never mirror engine state into the staging area or a snapshot
        if Workspace::is_metadata(relative) {
            continue;
        }
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)
                .with_context(|| format!("failed to create directory {}", target.display()))?;
        } else if entry.file_type().is_file() {
            copy_file(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Copy a single file, creating intermediate directories and carrying the
/// source mtime over to the copy.
pub fn copy_file(source: &Path, destination: &Path) -> anyhow::Result<()> {
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    std::fs::copy(source, destination).with_context(|| {
        format!(
            "failed to copy {} to {}",
            source.display(),
            destination.display()
        )
    })?;

    let metadata = std::fs::metadata(source)?;
    filetime::set_file_mtime(destination, FileTime::from_last_modification_time(&metadata))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    #[test]
    fn copy_tree_preserves_mtimes() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let source = dir.child("source");
        source.child("a/b/file.txt").write_str("content")?;
        filetime::set_file_mtime(
            source.child("a/b/file.txt").path(),
            FileTime::from_unix_time(1_000_000, 0),
        )?;

        copy_tree(source.path(), dir.child("destination").path())?;

        let copied = dir.child("destination/a/b/file.txt");
        copied.assert("content");
        assert_eq!(
            FileSignature::of(copied.path())?,
            FileSignature::of(source.child("a/b/file.txt").path())?
        );

        Ok(())
    }

    #[test]
    fn copy_tree_overlays_without_deleting() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let source = dir.child("source");
        source.child("kept.txt").write_str("new")?;
        let destination = dir.child("destination");
        destination.child("kept.txt").write_str("old")?;
        destination.child("extra.txt").write_str("extra")?;

        copy_tree(source.path(), destination.path())?;

        destination.child("kept.txt").assert("new");
        destination.child("extra.txt").assert("extra");

        Ok(())
    }

    #[test]
    fn list_files_skips_the_metadata_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        dir.child("a.txt").write_str("a")?;
        dir.child(".wit/staging/a.txt").write_str("a")?;

        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());
        let files = workspace.list_files()?;

        assert_eq!(files, vec![PathBuf::from("a.txt")]);

        Ok(())
    }
}
