//! Reference table and activated-branch marker
//!
//! References live in a single line-oriented table: line 1 is always
//! `HEAD=<id-or-empty>`, line 2 is always `master=<id-or-empty>`, and
//! subsequent lines are user branches in creation order. Lookups are
//! first-match-wins, so a hand-edited table with a shadowed duplicate still
//! resolves deterministically.
//!
//! The activated marker is a separate scalar file holding either a branch
//! name (HEAD tracks that branch) or a raw commit id (detached state).
//!
//! ## Locking
//!
//! Table rewrites take an exclusive lock on the references file. This makes
//! a single rewrite atomic-enough; nothing protects a whole operation
//! spanning several reads and writes (accepted single-caller model).

use crate::artifacts::branch_name::BranchName;
use crate::artifacts::commit_id::CommitId;
use crate::error::WitError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

/// Name of the HEAD entry, always the first table line
pub const HEAD_REF_NAME: &str = "HEAD";

/// Default branch, always the second table line
pub const DEFAULT_BRANCH: &str = "master";

/// Reference manager rooted at the metadata directory
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.wit`)
    path: Box<Path>,
}

impl Refs {
    /// Write the initial table with empty HEAD and master pointers
    pub fn initialize(&self) -> anyhow::Result<()> {
        self.write_lines(&[
            format!("{}=", HEAD_REF_NAME),
            format!("{}=", DEFAULT_BRANCH),
        ])
    }

    /// Current HEAD commit, None before the first commit
    pub fn read_head(&self) -> anyhow::Result<Option<CommitId>> {
        let lines = self.read_lines()?;
        let (name, value) = Self::parse_line(lines.first().map(String::as_str))?;

        if name != HEAD_REF_NAME {
            anyhow::bail!("malformed references table: first entry is {}", name);
        }

        Self::parse_value(value)
    }

    /// Rewrite the HEAD line, preserving every other line verbatim
    pub fn set_head(&self, id: &CommitId) -> anyhow::Result<()> {
        let mut lines = self.read_lines()?;
        if lines.is_empty() {
            anyhow::bail!("malformed references table: no entries");
        }

        lines[0] = format!("{}={}", HEAD_REF_NAME, id);
        self.write_lines(&lines)
    }

    /// Commit a branch points at, first occurrence wins
    ///
    /// Fails with `BranchNotFound` when no table line carries the name.
    /// The pointer itself may still be empty (no commits yet).
    pub fn resolve_branch(&self, name: &str) -> anyhow::Result<Option<CommitId>> {
        for line in self.branch_lines()? {
            let (key, value) = Self::parse_line(Some(&line))?;
            if key == name {
                return Self::parse_value(value);
            }
        }

        Err(WitError::BranchNotFound(name.to_string()).into())
    }

    /// True iff the identifier appears as a branch key in the table
    ///
    /// Distinguishes a branch-name argument from a raw commit-id argument
    /// in checkout and merge. HEAD is not a branch.
    pub fn is_branch(&self, name: &str) -> anyhow::Result<bool> {
        for line in self.branch_lines()? {
            let (key, _) = Self::parse_line(Some(&line))?;
            if key == name {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Append a new branch entry
    pub fn create_branch(
        &self,
        name: &BranchName,
        id: Option<&CommitId>,
    ) -> anyhow::Result<()> {
        if self.is_branch(name.as_ref())? {
            return Err(WitError::DuplicateBranch(name.to_string()).into());
        }

        let mut lines = self.read_lines()?;
        lines.push(format!(
            "{}={}",
            name,
            id.map(CommitId::to_string).unwrap_or_default()
        ));
        self.write_lines(&lines)
    }

    /// Rewrite the first matching branch line in place
    pub fn update_branch(&self, name: &str, id: &CommitId) -> anyhow::Result<()> {
        let mut lines = self.read_lines()?;

        for line in lines.iter_mut().skip(1) {
            let (key, _) = Self::parse_line(Some(line.as_str()))?;
            if key == name {
                *line = format!("{}={}", name, id);
                return self.write_lines(&lines);
            }
        }

        Err(WitError::BranchNotFound(name.to_string()).into())
    }

    /// The activated-branch marker: a branch name, or a raw commit id when
    /// HEAD is detached.
    pub fn read_activated(&self) -> anyhow::Result<String> {
        let content = std::fs::read_to_string(self.activated_path())
            .with_context(|| "failed to read the activated-branch marker")?;

        Ok(content.trim().to_string())
    }

    pub fn set_activated(&self, marker: &str) -> anyhow::Result<()> {
        std::fs::write(self.activated_path(), marker)
            .with_context(|| "failed to write the activated-branch marker")?;

        Ok(())
    }

    pub fn references_path(&self) -> Box<Path> {
        self.path.join("references").into_boxed_path()
    }

    pub fn activated_path(&self) -> Box<Path> {
        self.path.join("activated").into_boxed_path()
    }

    fn branch_lines(&self) -> anyhow::Result<impl Iterator<Item = String>> {
        // line 1 is HEAD, never a branch
        Ok(self.read_lines()?.into_iter().skip(1))
    }

    fn read_lines(&self) -> anyhow::Result<Vec<String>> {
        let content = std::fs::read_to_string(self.references_path())
            .with_context(|| "failed to read the references table")?;

        Ok(content.lines().map(String::from).collect())
    }

    fn write_lines(&self, lines: &[String]) -> anyhow::Result<()> {
        let mut table_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.references_path())
            .with_context(|| "failed to open the references table")?;
        let mut lock = file_guard::lock(&mut table_file, Lock::Exclusive, 0, 1)?;

        let mut content = lines.join("\n");
        content.push('\n');
        lock.deref_mut().write_all(content.as_bytes())?;

        Ok(())
    }

    fn parse_line(line: Option<&str>) -> anyhow::Result<(&str, &str)> {
        line.and_then(|line| line.split_once('='))
            .ok_or_else(|| anyhow::anyhow!("malformed references table entry: {:?}", line))
    }

    fn parse_value(value: &str) -> anyhow::Result<Option<CommitId>> {
        if value.is_empty() {
            Ok(None)
        } else {
            Ok(Some(CommitId::try_parse(value.to_string())?))
        }
    }
}
