use crate::artifacts::commit_id::CommitId;
use std::path::PathBuf;

/// Read-only snapshot of the repository state
///
/// Produced by the inspector, displayed by the status command, and used as
/// the precondition check by checkout and merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Current HEAD, empty before the first commit
    pub head: Option<CommitId>,
    /// Staged paths with no counterpart in the HEAD snapshot
    pub pending_commit: Vec<PathBuf>,
    /// Paths whose staged copy and working-tree copy have diverged
    pub unstaged_changes: Vec<PathBuf>,
    /// Working-tree paths with no staged counterpart
    pub untracked: Vec<PathBuf>,
}

impl StatusReport {
    /// True when outstanding work blocks checkout and merge
    pub fn has_outstanding_work(&self) -> bool {
        !self.pending_commit.is_empty() || !self.unstaged_changes.is_empty()
    }
}
