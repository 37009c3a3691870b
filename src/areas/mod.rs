//! Core repository components
//!
//! This module contains the stateful storage areas of a wit repository:
//!
//! - `refs`: reference table, HEAD and activated-branch bookkeeping
//! - `staging`: mirror tree holding files queued for the next commit
//! - `snapshots`: immutable commit snapshots and metadata records
//! - `workspace`: working directory file system operations
//! - `repository`: high-level coordination and root discovery

pub mod refs;
pub mod repository;
pub mod snapshots;
pub mod staging;
pub mod workspace;
