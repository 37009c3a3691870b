use crate::areas::repository::Repository;
use crate::artifacts::branch_name::BranchName;

impl Repository {
    /// Record a new branch pointing at the current HEAD
    ///
    /// Appends to the reference table without switching the activated
    /// branch. The pointer may be empty when no commit exists yet.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let name = BranchName::try_parse(name.to_string())?;
        let head = self.refs().read_head()?;

        self.refs().create_branch(&name, head.as_ref())
    }
}
