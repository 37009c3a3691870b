//! Value types and read-only analyses
//!
//! - `commit_id`: random commit identifiers
//! - `branch_name`: validated branch names
//! - `status`: change detection and the status report
//! - `merge`: common-ancestor discovery between ancestor chains

pub mod branch_name;
pub mod commit_id;
pub mod merge;
pub mod status;
