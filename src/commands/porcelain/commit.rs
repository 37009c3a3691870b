use crate::areas::repository::Repository;
use crate::artifacts::commit_id::CommitId;
use std::io::Write;

/// Result of a commit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Created(CommitId),
    NothingToCommit,
}

impl Repository {
    /// Snapshot the staging area as a new commit
    ///
    /// Soft outcome when no staged path is missing from the HEAD snapshot:
    /// nothing is created and no pointer moves. The pending check is
    /// existence-only; editing the content of an already-committed staged
    /// file does not by itself make the tree committable.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<CommitOutcome> {
        let parent = self.refs().read_head()?;

        if self.inspector().pending_commit(parent.as_ref())?.is_empty() {
            writeln!(self.writer(), "nothing to commit")?;
            return Ok(CommitOutcome::NothingToCommit);
        }

        let id = self.commit_snapshot(parent, message)?;

        Ok(CommitOutcome::Created(id))
    }

    /// Create the snapshot and move the pointers, without the pending gate
    ///
    /// The activated branch advances only when its stored pointer equals the
    /// pre-commit HEAD (HEAD exactly at the branch tip); a detached or
    /// behind HEAD leaves every branch pointer untouched. HEAD itself always
    /// moves. Merge calls this directly after staging its delta.
    pub(crate) fn commit_snapshot(
        &mut self,
        parent: Option<CommitId>,
        message: &str,
    ) -> anyhow::Result<CommitId> {
        let id = self
            .snapshots()
            .create(parent.as_ref(), message, self.staging().path())?;

        let activated = self.refs().read_activated()?;
        if self.refs().is_branch(&activated)?
            && self.refs().resolve_branch(&activated)? == parent
        {
            self.refs().update_branch(&activated, &id)?;
        }

        self.refs().set_head(&id)?;

        writeln!(self.writer(), "[{}] {}", id.to_short_id(), message)?;

        Ok(id)
    }
}
