use crate::areas::repository::Repository;
use std::path::Path;

impl Repository {
    /// Drop a file from the staging area and the working tree
    pub fn remove(&mut self, path: &str) -> anyhow::Result<()> {
        let relative = self.workspace().relativize_unchecked(Path::new(path))?;

        self.staging().remove(self.workspace().path(), &relative)
    }
}
