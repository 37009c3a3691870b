//! Engine error kinds
//!
//! Hard failures abort the running operation and surface their specific kind
//! to the caller. Soft outcomes (nothing to commit, dirty working tree) are
//! not errors; porcelain operations report them as return values instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WitError {
    #[error("no wit repository found in {} or any parent directory", .0.display())]
    NotARepository(PathBuf),

    #[error("branch {0} not found")]
    BranchNotFound(String),

    #[error("branch {0} already exists")]
    DuplicateBranch(String),

    #[error("path {} does not exist in the working tree", .0.display())]
    PathNotFound(PathBuf),

    #[error("{} has no staged counterpart", .0.display())]
    NotTracked(PathBuf),

    #[error("commit {0} not found")]
    CommitNotFound(String),

    #[error("no common ancestor between {head} and {other}")]
    NoCommonAncestor { head: String, other: String },

    #[error("corrupt history: {0} appears twice in its ancestor chain")]
    CorruptHistory(String),
}
