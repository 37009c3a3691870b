//! Repository orchestration
//!
//! The repository composes the storage areas and exposes the porcelain
//! operations implemented under `commands::porcelain`. It is located from
//! any subdirectory by walking upward until the metadata directory is found.

use crate::areas::refs::Refs;
use crate::areas::snapshots::Snapshots;
use crate::areas::staging::Staging;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::inspector::Inspector;
use crate::error::WitError;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Name of the metadata directory anchoring all engine state
pub const METADATA_DIR: &str = ".wit";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: Staging,
    snapshots: Snapshots,
    refs: Refs,
    workspace: Workspace,
}

impl Repository {
    /// Open a repository rooted exactly at `path`, creating the directory
    /// if needed. Used by init; every other entry point goes through
    /// `discover`.
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        Ok(Self::open(path, writer))
    }

    /// Locate the repository root by walking upward from `start`
    ///
    /// Fails with `NotARepository` when the filesystem root is reached
    /// without finding the metadata directory.
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start.canonicalize()?;
        let mut current: &Path = if start.is_file() {
            start
                .parent()
                .ok_or_else(|| WitError::NotARepository(start.to_path_buf()))?
        } else {
            &start
        };

        loop {
            if current.join(METADATA_DIR).is_dir() {
                return Ok(Self::open(current.to_path_buf(), writer));
            }

            current = current
                .parent()
                .ok_or_else(|| WitError::NotARepository(start.to_path_buf()))?;
        }
    }

    fn open(path: PathBuf, writer: Box<dyn std::io::Write>) -> Self {
        let metadata = path.join(METADATA_DIR);
        let staging = Staging::new(metadata.join("staging").into_boxed_path());
        let snapshots = Snapshots::new(metadata.join("snapshots").into_boxed_path());
        let refs = Refs::new(metadata.clone().into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging,
            snapshots,
            refs,
            workspace,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn snapshots(&self) -> &Snapshots {
        &self.snapshots
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn inspector(&'_ self) -> Inspector<'_> {
        Inspector::new(self)
    }
}
