use crate::areas::repository::Repository;
use std::path::Path;

impl Repository {
    /// Queue a file or directory for the next commit
    ///
    /// The path is resolved against the invocation directory and must exist
    /// inside the working tree. A directory is staged recursively; re-adding
    /// a path overwrites its staged copy.
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        let relative = self.workspace().relativize(Path::new(path))?;

        self.staging().add(self.workspace().path(), &relative)
    }
}
