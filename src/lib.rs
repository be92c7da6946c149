//! # merkle_audit
//!
//! A binary merkle tree over an ordered set of leaf hashes, with compact
//! audit proofs that a leaf is included under a root.
//!
//! ## Core Concepts
//!
//! - **Leaves**: caller-supplied hashes; order matters, duplicates are distinct
//! - **Parents**: `hash(left ‖ right)`; an unpaired trailing node is carried
//!   up with its hash unchanged
//! - **Audit trail**: sibling hashes plus branch directions, leaf to root
//! - **Hasher**: the hash function is injected, BLAKE3 by default
//!
//! ## Example
//!
//! ```
//! use merkle_audit::{Blake3Hasher, Hasher, MerkleTree};
//!
//! let leaves: Vec<_> = ["a", "b", "c"]
//!     .iter()
//!     .map(|s| Blake3Hasher.digest(s.as_bytes()))
//!     .collect();
//!
//! let mut tree = MerkleTree::new();
//! let root = tree.build_tree(leaves.clone()).unwrap();
//!
//! let trail = tree.audit_proof(&leaves[2]).unwrap();
//! assert!(tree.verify_audit(&root, &leaves[2], &trail));
//! assert!(tree.verify(&root, &leaves[0]));
//! ```

pub mod config;
pub mod hasher;
pub mod model;
pub mod shared;
pub mod tree;

mod error;

pub use config::{HashAlgorithm, TreeConfig};
pub use error::{Error, Result};
pub use hasher::{Blake3Hasher, Hasher, Sha256Hasher};
pub use model::{Direction, Hash, ProofHash};
pub use shared::SharedTree;
pub use tree::{replay, verify_audit_with, MerkleTree, Node, NodeId};
