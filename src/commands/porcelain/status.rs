use crate::areas::repository::Repository;
use crate::artifacts::status::status_report::StatusReport;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Report the current repository state
    ///
    /// A pure read: HEAD, the staged-but-uncommitted paths, the paths whose
    /// working copy diverged from the staging area, and the untracked
    /// paths. Also rendered to the writer for display.
    pub fn status(&mut self) -> anyhow::Result<StatusReport> {
        let report = self.inspector().report()?;

        match &report.head {
            Some(head) => writeln!(self.writer(), "HEAD at {}", head)?,
            None => writeln!(self.writer(), "HEAD at (no commits yet)")?,
        }

        for path in &report.pending_commit {
            writeln!(self.writer(), " {} {}", "A".green(), path.display())?;
        }
        for path in &report.unstaged_changes {
            writeln!(self.writer(), " {} {}", "M".red(), path.display())?;
        }
        for path in &report.untracked {
            writeln!(self.writer(), "?? {}", path.display())?;
        }

        Ok(report)
    }
}
