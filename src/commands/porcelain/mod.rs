//! Porcelain commands (user-facing operations)
//!
//! Each file extends `Repository` with one operation:
//!
//! - `init`: create the metadata directory and initial state
//! - `add`: stage files for the next commit
//! - `commit`: snapshot the staging area
//! - `status`: report pending, unstaged and untracked paths
//! - `rm`: drop a file from the staging area and the working tree
//! - `checkout`: switch branches or move to a raw commit
//! - `branch`: record a new branch at the current HEAD
//! - `merge`: file-level union merge against another branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod merge;
pub mod rm;
pub mod status;
