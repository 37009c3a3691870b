//! Commit identifier
//!
//! Commit ids are 40-character strings drawn from a hexadecimal alphabet.
//! They are random, not content hashes: two commits with identical content
//! get different ids, and an id reveals nothing about the snapshot it names.
//!
//! ## Format
//!
//! - Full: 40 characters from `1234567890abcdef`
//! - Short: first 7 characters, used in console messages

use rand::Rng;

/// Alphabet commit ids are sampled from
pub const COMMIT_ID_ALPHABET: &[u8] = b"1234567890abcdef";

/// Length of a full commit id
pub const COMMIT_ID_LENGTH: usize = 40;

/// Identifier of a single commit snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a fresh random commit id
    ///
    /// Ids are assumed unique by construction; a collision across the 16^40
    /// space is out of scope.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id = (0..COMMIT_ID_LENGTH)
            .map(|_| COMMIT_ID_ALPHABET[rng.random_range(0..COMMIT_ID_ALPHABET.len())] as char)
            .collect();

        CommitId(id)
    }

    /// Parse and validate a commit id from a string
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            anyhow::bail!("invalid commit id length: {}", id.len());
        }
        if !id.bytes().all(|b| COMMIT_ID_ALPHABET.contains(&b)) {
            anyhow::bail!("invalid commit id characters: {}", id);
        }

        Ok(Self(id))
    }

    /// Abbreviated form used in console messages
    pub fn to_short_id(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
