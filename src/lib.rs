//! wit: a minimal local version-control engine
//!
//! Snapshots a working directory tree into immutable commits, tracks named
//! branches and a current position (HEAD), and supports staging, committing,
//! branch switching and a simplified file-level merge. No content hashing,
//! no deduplication, no multi-process safety: exclusive sequential access by
//! one caller at a time.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;
