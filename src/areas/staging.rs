//! Staging area
//!
//! A mirror subtree of the working directory holding the files queued for
//! the next commit. Files enter through an explicit add (last add wins) and
//! leave only through an explicit remove; nothing is drained automatically.

use crate::areas::workspace::copy_tree;
use crate::error::WitError;
use anyhow::Context;
use derive_new::new;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Staging {
    path: Box<Path>,
}

impl Staging {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Queue a file or directory for the next commit
    ///
    /// Recursively copies the source into the staging mirror at the same
    /// relative location, overwriting any existing staged copy.
    pub fn add(&self, workspace_root: &Path, relative: &Path) -> anyhow::Result<()> {
        let source = workspace_root.join(relative);
        if !source.exists() {
            return Err(WitError::PathNotFound(relative.to_path_buf()).into());
        }

        copy_tree(&source, &self.path.join(relative))
    }

    /// Drop a staged file and its working-tree counterpart
    ///
    /// Fails with `NotTracked` when no staged counterpart exists. The
    /// working-tree copy may legitimately already be gone.
    pub fn remove(&self, workspace_root: &Path, relative: &Path) -> anyhow::Result<()> {
        let staged = self.path.join(relative);
        if !staged.is_file() {
            return Err(WitError::NotTracked(relative.to_path_buf()).into());
        }

        std::fs::remove_file(&staged)
            .with_context(|| format!("failed to remove staged copy of {}", relative.display()))?;

        let working = workspace_root.join(relative);
        if working.is_file() {
            std::fs::remove_file(&working).with_context(|| {
                format!("failed to remove working-tree copy of {}", relative.display())
            })?;
        }

        Ok(())
    }

    /// True when the path has a staged counterpart
    pub fn contains(&self, relative: &Path) -> bool {
        self.path.join(relative).exists()
    }

    /// All staged files as relative paths, in name order
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let files = WalkDir::new(self.path.as_ref())
            .into_iter()
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
}
