//! Branch name validation
//!
//! Branch names become keys in the line-oriented reference table, so anything
//! that would break the `name=value` format is rejected up front.

/// Validated branch name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }
        if name == crate::areas::refs::HEAD_REF_NAME {
            anyhow::bail!("{} is a reserved reference name", name);
        }
        if name.contains('=') {
            anyhow::bail!("branch name {} cannot contain '='", name);
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("branch name {} cannot contain whitespace", name);
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
