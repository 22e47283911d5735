//! Determinism verification utilities.
//!
//! The same edge multiset must always produce the same matching. The
//! `matching_root` is a domain-separated hash over the canonical edge list
//! that lets two runs be compared without comparing full payloads.

use bazaar_types::Matching;
use sha2::{Digest, Sha256};

/// Compute the root hash of a matching.
///
/// Depends on the number of edges and each edge's request index, offer
/// index and weight, in the matching's canonical (request-sorted) order.
#[must_use]
pub fn compute_matching_root(matching: &Matching) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"bazaar:matching_root:v1:");
    hasher.update((matching.len() as u64).to_le_bytes());

    for edge in matching {
        hasher.update((edge.request as u64).to_le_bytes());
        hasher.update((edge.offer as u64).to_le_bytes());
        hasher.update([edge.weight]);
    }

    hasher.finalize().into()
}

/// Recompute the root of `matching` and compare it with `expected_root`.
#[must_use]
pub fn verify_matching_root(matching: &Matching, expected_root: &[u8; 32]) -> bool {
    compute_matching_root(matching) == *expected_root
}

#[cfg(test)]
mod tests {
    use bazaar_types::Edge;

    use super::*;

    #[test]
    fn empty_matching_deterministic() {
        let a = compute_matching_root(&Matching::new());
        let b = compute_matching_root(&Matching::new());
        assert_eq!(a, b);
        assert_ne!(a, [0u8; 32]);
    }

    #[test]
    fn edge_order_does_not_matter() {
        let a = Matching::from_edges(vec![Edge::new(0, 1, 3), Edge::new(1, 0, 2)]);
        let b = Matching::from_edges(vec![Edge::new(1, 0, 2), Edge::new(0, 1, 3)]);
        assert_eq!(compute_matching_root(&a), compute_matching_root(&b));
    }

    #[test]
    fn weight_changes_root() {
        let a = Matching::from_edges(vec![Edge::new(0, 0, 3)]);
        let b = Matching::from_edges(vec![Edge::new(0, 0, 4)]);
        assert_ne!(compute_matching_root(&a), compute_matching_root(&b));
    }

    #[test]
    fn verify_correct_and_wrong_root() {
        let m = Matching::from_edges(vec![Edge::new(2, 5, 9)]);
        let root = compute_matching_root(&m);
        assert!(verify_matching_root(&m, &root));
        assert!(!verify_matching_root(&m, &[0xAB; 32]));
    }
}
