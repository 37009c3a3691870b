use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the metadata directory and the initial engine state
    ///
    /// Fails when the metadata directory already exists. Leaves HEAD and
    /// master empty and activates the default branch.
    pub fn init(&mut self) -> anyhow::Result<()> {
        let metadata = self.metadata_path();
        if metadata.exists() {
            anyhow::bail!(
                "wit repository already exists in {}",
                self.path().display()
            );
        }

        fs::create_dir_all(self.snapshots().path())
            .context("failed to create the snapshots directory")?;
        fs::create_dir(self.staging().path())
            .context("failed to create the staging directory")?;

        self.refs()
            .initialize()
            .context("failed to create the initial references table")?;
        self.refs()
            .set_activated(DEFAULT_BRANCH)
            .context("failed to activate the default branch")?;

        writeln!(
            self.writer(),
            "Initialized empty wit repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
