//! Change detection
//!
//! Three pure reads over the staging mirror, the working tree and the HEAD
//! snapshot. Every gating operation (commit, checkout, merge) builds on them.
//!
//! Terminology:
//! - pending-commit files: staged paths that do not exist in the parent
//!   commit's snapshot. Content is never compared; a path already present in
//!   the parent snapshot is never pending, even when its bytes differ.
//! - unstaged files: paths present in both the staging mirror and the working
//!   tree whose size+mtime signatures differ.
//! - untracked files: working-tree paths with no staged counterpart.

use crate::areas::repository::Repository;
use crate::areas::workspace::FileSignature;
use crate::artifacts::commit_id::CommitId;
use crate::artifacts::status::status_report::StatusReport;
use derive_new::new;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Staged paths missing from the parent commit's snapshot
    ///
    /// With no parent (no commits yet) every staged file is pending. The
    /// check is existence-only by contract.
    pub fn pending_commit(&self, parent: Option<&CommitId>) -> anyhow::Result<Vec<PathBuf>> {
        let staged = self.repository.staging().list_files()?;

        match parent {
            None => Ok(staged),
            Some(parent) => {
                let snapshot = self.repository.snapshots().snapshot_path(parent);

                Ok(staged
                    .into_iter()
                    .filter(|path| !snapshot.join(path).exists())
                    .collect())
            }
        }
    }

    /// Staged paths whose working-tree copy has diverged
    pub fn unstaged_changes(&self) -> anyhow::Result<Vec<PathBuf>> {
        changed_files(
            self.repository.staging().path(),
            self.repository.workspace().path(),
        )
    }

    /// Working-tree paths with no staged counterpart
    pub fn untracked(&self) -> anyhow::Result<Vec<PathBuf>> {
        let staging = self.repository.staging();

        Ok(self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .filter(|path| !staging.contains(path))
            .collect())
    }

    /// Full status snapshot against the current HEAD
    pub fn report(&self) -> anyhow::Result<StatusReport> {
        let head = self.repository.refs().read_head()?;
        let pending_commit = self.pending_commit(head.as_ref())?;
        let unstaged_changes = self.unstaged_changes()?;
        let untracked = self.untracked()?;

        Ok(StatusReport {
            head,
            pending_commit,
            unstaged_changes,
            untracked,
        })
    }
}

/// Per-directory signature diff between two mirror trees
///
/// Walks every directory under `base` and compares the files directly inside
/// it against the matching directory under `other`. A path is reported when
/// its size+mtime signature differs between the two sides. Files present on
/// only one side are not reported; this comparison covers common files only.
///
/// Shared by the unstaged-changes read (staging vs working tree) and the
/// merge delta (common ancestor vs other branch tip).
pub fn changed_files(base: &Path, other: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut changed = BTreeSet::new();

    for entry in WalkDir::new(base).into_iter().filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_dir() {
            continue;
        }

        let relative_dir = entry.path().strip_prefix(base)?.to_path_buf();
        let other_dir = other.join(&relative_dir);
        if !other_dir.is_dir() {
            continue;
        }

        for child in std::fs::read_dir(entry.path())? {
            let child = child?;
            if !child.file_type()?.is_file() {
                continue;
            }

            let counterpart = other_dir.join(child.file_name());
            if !counterpart.is_file() {
                continue;
            }

            if FileSignature::of(&child.path())? != FileSignature::of(&counterpart)? {
                changed.insert(relative_dir.join(child.file_name()));
            }
        }
    }

    Ok(changed.into_iter().collect())
}
