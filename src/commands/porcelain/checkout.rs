use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::areas::workspace::copy_tree;
use crate::artifacts::commit_id::CommitId;
use crate::error::WitError;
use std::io::Write;

/// Result of a checkout attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Switched(CommitId),
    DirtyWorkingTree,
}

impl Repository {
    /// Switch the working tree to a branch or a raw commit id
    ///
    /// A dirty working tree (pending or unstaged changes) aborts softly with
    /// no mutation at all. The snapshot is overlaid onto the working tree:
    /// files present in the snapshot are created or overwritten, files added
    /// to the working tree after the snapshot was taken persist.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<CheckoutOutcome> {
        let is_branch = self.refs().is_branch(target)?;
        let target_id = if is_branch {
            self.refs()
                .resolve_branch(target)?
                .ok_or_else(|| WitError::CommitNotFound(target.to_string()))?
        } else {
            CommitId::try_parse(target.to_string())?
        };

        let snapshot = self.snapshots().snapshot_path(&target_id);
        if !snapshot.is_dir() {
            return Err(WitError::CommitNotFound(target_id.to_string()).into());
        }

        let report = self.inspector().report()?;
        if report.has_outstanding_work() {
            writeln!(
                self.writer(),
                "uncommitted or unstaged changes, checkout cancelled"
            )?;
            return Ok(CheckoutOutcome::DirtyWorkingTree);
        }

        if is_branch {
            self.refs().set_activated(target)?;
        }

        copy_tree(&snapshot, self.workspace().path())?;

        // master mirrors the commit-time fast-forward rule: it follows a
        // checkout only while it is the activated branch sitting exactly at
        // the pre-checkout HEAD
        if self.refs().read_activated()? == DEFAULT_BRANCH
            && self.refs().resolve_branch(DEFAULT_BRANCH)? == report.head
        {
            self.refs().update_branch(DEFAULT_BRANCH, &target_id)?;
        }

        self.refs().set_head(&target_id)?;

        writeln!(self.writer(), "HEAD is now at {}", target_id.to_short_id())?;

        Ok(CheckoutOutcome::Switched(target_id))
    }
}
