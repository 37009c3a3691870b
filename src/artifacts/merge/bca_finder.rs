//! Best common ancestor (BCA) discovery
//!
//! Ancestor chains are strictly linear (one parent per commit) and ordered
//! closest-first, so the best common ancestor is the first element of the
//! HEAD chain that appears anywhere in the other chain.

use crate::artifacts::commit_id::CommitId;
use std::collections::HashSet;

/// Newest commit shared by two ancestor chains
///
/// Both chains must be ordered from tip to root. Returns None when the
/// histories are completely disjoint.
pub fn best_common_ancestor<'c>(
    head_chain: &'c [CommitId],
    other_chain: &[CommitId],
) -> Option<&'c CommitId> {
    let other = other_chain.iter().collect::<HashSet<_>>();

    head_chain.iter().find(|id| other.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(seed: u8) -> CommitId {
        let c = char::from(b'a' + seed % 6);
        CommitId::try_parse(c.to_string().repeat(40)).expect("valid id")
    }

    #[test]
    fn shared_root_is_found() {
        // a <- b (head), a <- c (other)
        let head_chain = vec![id(1), id(0)];
        let other_chain = vec![id(2), id(0)];

        assert_eq!(
            best_common_ancestor(&head_chain, &other_chain),
            Some(&id(0))
        );
    }

    #[test]
    fn newest_shared_commit_wins() {
        // a <- b <- c (head), a <- b <- d (other): b is newer than a
        let head_chain = vec![id(2), id(1), id(0)];
        let other_chain = vec![id(3), id(1), id(0)];

        assert_eq!(
            best_common_ancestor(&head_chain, &other_chain),
            Some(&id(1))
        );
    }

    #[test]
    fn other_tip_behind_head_resolves_to_the_tip() {
        // fast-forward shape: other tip is an ancestor of head
        let head_chain = vec![id(2), id(1), id(0)];
        let other_chain = vec![id(1), id(0)];

        assert_eq!(
            best_common_ancestor(&head_chain, &other_chain),
            Some(&id(1))
        );
    }

    #[test]
    fn disjoint_histories_have_no_ancestor() {
        let head_chain = vec![id(1), id(0)];
        let other_chain = vec![id(3), id(2)];

        assert_eq!(best_common_ancestor(&head_chain, &other_chain), None);
    }

    #[test]
    fn empty_chains_have_no_ancestor() {
        assert_eq!(best_common_ancestor(&[], &[id(0)]), None);
        assert_eq!(best_common_ancestor(&[id(0)], &[]), None);
    }
}
