use crate::areas::repository::Repository;
use crate::areas::workspace::copy_file;
use crate::artifacts::commit_id::CommitId;
use crate::artifacts::merge::bca_finder::best_common_ancestor;
use crate::artifacts::status::inspector::changed_files;
use crate::error::WitError;
use std::io::Write;

const MERGE_COMMIT_MESSAGE: &str = "merge";

/// Result of a merge attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged(CommitId),
    AlreadyUpToDate,
    DirtyWorkingTree,
}

impl Repository {
    /// Merge another branch into the current HEAD
    ///
    /// This is a whole-file, last-writer-wins union, not a content-level
    /// three-way merge: every file that differs between the common ancestor
    /// and the other branch's tip is taken wholesale from the other branch,
    /// staged, and committed with a single parent (the pre-merge HEAD). A
    /// file modified on both sides is silently overwritten by the other
    /// branch's version.
    pub fn merge(&mut self, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        let report = self.inspector().report()?;
        if report.has_outstanding_work() {
            writeln!(
                self.writer(),
                "uncommitted or unstaged changes, merge cancelled"
            )?;
            return Ok(MergeOutcome::DirtyWorkingTree);
        }

        let other_id = self
            .refs()
            .resolve_branch(branch_name)?
            .ok_or_else(|| WitError::CommitNotFound(branch_name.to_string()))?;
        let head_id = report
            .head
            .ok_or_else(|| anyhow::anyhow!("no commits on HEAD to merge into"))?;

        let head_chain = self.snapshots().ancestor_chain(&head_id)?;
        let other_chain = self.snapshots().ancestor_chain(&other_id)?;
        let base_id = best_common_ancestor(&head_chain, &other_chain)
            .ok_or_else(|| WitError::NoCommonAncestor {
                head: head_id.to_string(),
                other: other_id.to_string(),
            })?
            .clone();

        let other_snapshot = self.snapshots().snapshot_path(&other_id);
        let changed = changed_files(&self.snapshots().snapshot_path(&base_id), &other_snapshot)?;
        if changed.is_empty() {
            writeln!(self.writer(), "already up to date")?;
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        // stage the other branch's version of every changed path; copy_file
        // creates all missing intermediate staging directories
        for relative in &changed {
            copy_file(
                &other_snapshot.join(relative),
                &self.staging().path().join(relative),
            )?;
        }

        writeln!(
            self.writer(),
            "merging {} into {}",
            other_id.to_short_id(),
            head_id.to_short_id()
        )?;

        let id = self.commit_snapshot(Some(head_id), MERGE_COMMIT_MESSAGE)?;

        Ok(MergeOutcome::Merged(id))
    }
}
