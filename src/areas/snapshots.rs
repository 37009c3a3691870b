//! Commit store
//!
//! Every commit owns a full recursive copy of the staging area taken at
//! commit time (no deduplication across commits) plus a small line-oriented
//! metadata record. Snapshots are immutable once created; normal operations
//! never mutate or delete them.
//!
//! ## Layout
//!
//! - `snapshots/<id>/` — the snapshot tree
//! - `snapshots/<id>.txt` — `parent=<id-or-empty>`, timestamp, `message=<text>`

use crate::areas::workspace::copy_tree;
use crate::artifacts::commit_id::CommitId;
use crate::error::WitError;
use anyhow::Context;
use chrono::Utc;
use derive_new::new;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Snapshots {
    /// Path to the snapshots directory (typically `.wit/snapshots`)
    path: Box<Path>,
}

impl Snapshots {
    /// Capture the staging area as a new immutable commit
    pub fn create(
        &self,
        parent: Option<&CommitId>,
        message: &str,
        staging_path: &Path,
    ) -> anyhow::Result<CommitId> {
        let id = CommitId::generate();
        let timestamp = Utc::now().format("%c %z");

        std::fs::write(
            self.metadata_path(&id),
            format!(
                "parent={}\n{}\nmessage={}\n",
                parent.map(CommitId::to_string).unwrap_or_default(),
                timestamp,
                message
            ),
        )
        .with_context(|| format!("failed to write commit metadata for {}", id))?;

        let snapshot = self.snapshot_path(&id);
        std::fs::create_dir(&snapshot)
            .with_context(|| format!("failed to create snapshot directory for {}", id))?;
        copy_tree(staging_path, &snapshot)?;

        Ok(id)
    }

    /// Parent of a commit, None for the root commit
    pub fn parent_of(&self, id: &CommitId) -> anyhow::Result<Option<CommitId>> {
        let metadata = std::fs::read_to_string(self.metadata_path(id))
            .map_err(|_| WitError::CommitNotFound(id.to_string()))?;

        let parent = metadata
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("parent="))
            .ok_or_else(|| anyhow::anyhow!("malformed commit metadata for {}", id))?;

        if parent.is_empty() {
            Ok(None)
        } else {
            Ok(Some(CommitId::try_parse(parent.to_string())?))
        }
    }

    /// The commit and all its ancestors, closest first
    ///
    /// Walks parent links iteratively with a visited set; a repeated id
    /// fails with `CorruptHistory` instead of looping forever.
    pub fn ancestor_chain(&self, id: &CommitId) -> anyhow::Result<Vec<CommitId>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(id.clone());

        while let Some(id) = current {
            if !visited.insert(id.clone()) {
                return Err(WitError::CorruptHistory(id.to_string()).into());
            }

            current = self.parent_of(&id)?;
            chain.push(id);
        }

        Ok(chain)
    }

    pub fn snapshot_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.as_ref())
    }

    pub fn metadata_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(format!("{}.txt", id))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
