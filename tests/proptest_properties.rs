//! Property-based tests for tree construction and audit proofs.
//!
//! Uses proptest to generate random leaf sets and check that proofs
//! round-trip, reject forgeries, and that builds are deterministic.
//!
//! Run with: `cargo test --test proptest_properties`

use proptest::prelude::*;
use std::collections::HashSet;

use merkle_audit::{verify_audit_with, Blake3Hasher, Hash, Hasher, MerkleTree, Sha256Hasher};

// =============================================================================
// Strategies for generating test data
// =============================================================================

/// Generate 1..64 distinct 32-byte leaf hashes
fn distinct_leaves_strategy() -> impl Strategy<Value = Vec<Hash>> {
    prop::collection::hash_set(any::<[u8; 32]>(), 1..64)
        .prop_map(|set| set.into_iter().map(Hash::from).collect())
}

/// Generate leaves of varying (non-zero) length, duplicates allowed
fn ragged_leaves_strategy() -> impl Strategy<Value = Vec<Hash>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 1..48), 1..40).prop_map(|raw| {
        raw.into_iter()
            .map(|bytes| Hash::new(bytes).expect("non-empty"))
            .collect()
    })
}

fn build(leaves: &[Hash]) -> (MerkleTree, Hash) {
    let mut tree = MerkleTree::new();
    let root = tree.build_tree(leaves.to_vec()).expect("non-empty leaves");
    (tree, root)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip(leaves in distinct_leaves_strategy()) {
        let (tree, root) = build(&leaves);
        for leaf in &leaves {
            prop_assert_eq!(tree.verify(&root, leaf), leaves.len() > 1);
        }
    }

    #[test]
    fn prop_round_trip_ragged(leaves in ragged_leaves_strategy()) {
        prop_assume!(leaves.len() > 1);
        let mut tree = MerkleTree::with_hasher(Sha256Hasher);
        let root = tree.build_tree(leaves.clone()).unwrap();

        for leaf in &leaves {
            let trail = tree.audit_proof(leaf).unwrap();
            prop_assert!(verify_audit_with(&Sha256Hasher, &root, leaf, &trail));
        }
    }

    #[test]
    fn prop_tamper_detected(
        leaves in distinct_leaves_strategy(),
        pick in any::<prop::sample::Index>(),
        byte in 0usize..32,
        bit in 0u8..8,
    ) {
        prop_assume!(leaves.len() > 1);
        let (tree, root) = build(&leaves);
        let original = pick.get(&leaves);
        let trail = tree.audit_proof(original).unwrap();

        let mut bytes = original.as_bytes().to_vec();
        bytes[byte] ^= 1 << bit;
        let forged = Hash::new(bytes).unwrap();

        prop_assert!(!tree.verify_audit(&root, &forged, &trail));
    }

    #[test]
    fn prop_deterministic(leaves in ragged_leaves_strategy()) {
        let (_, first) = build(&leaves);
        let (_, second) = build(&leaves);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_height_is_ceil_log2(leaves in distinct_leaves_strategy()) {
        let (tree, _) = build(&leaves);
        let expected = leaves.len().next_power_of_two().trailing_zeros() as usize;
        prop_assert_eq!(tree.height(), Some(expected));

        // Proofs never exceed the height; carries make them shorter
        if leaves.len() > 1 {
            for leaf in &leaves {
                let trail = tree.audit_proof(leaf).unwrap();
                prop_assert!(!trail.is_empty());
                prop_assert!(trail.len() <= expected);
            }
        }
    }

    #[test]
    fn prop_leaves_recorded_in_order(leaves in ragged_leaves_strategy()) {
        let (tree, _) = build(&leaves);
        prop_assert_eq!(tree.leaf_hashes(), leaves);
    }

    #[test]
    fn prop_swapping_distinct_neighbours_changes_root(leaves in distinct_leaves_strategy()) {
        prop_assume!(leaves.len() > 1);
        let (_, root) = build(&leaves);

        let mut swapped = leaves.clone();
        swapped.swap(0, 1);
        let (_, swapped_root) = build(&swapped);
        prop_assert_ne!(root, swapped_root);
    }

    #[test]
    fn prop_foreign_leaf_never_verifies(
        leaves in distinct_leaves_strategy(),
        stranger in any::<[u8; 32]>(),
    ) {
        let known: HashSet<Hash> = leaves.iter().cloned().collect();
        let stranger = Hash::from(stranger);
        prop_assume!(!known.contains(&stranger));

        let (tree, root) = build(&leaves);
        prop_assert!(!tree.verify(&root, &stranger));
    }
}

#[test]
fn test_blake3_is_the_default_hasher() {
    let leaves: Vec<Hash> = (0u8..4).map(|i| Hash::from([i; 32])).collect();
    let (tree, root) = build(&leaves);

    let mut explicit = MerkleTree::with_hasher(Blake3Hasher);
    assert_eq!(explicit.build_tree(leaves).unwrap(), root);
    assert_eq!(tree.hasher().name(), "blake3");
}
