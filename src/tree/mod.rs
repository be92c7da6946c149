//! Binary merkle tree with audit proofs
//!
//! This implements a hash tree where:
//! - Leaves are caller-supplied hashes, kept in insertion order
//! - Each parent hashes `left ‖ right`; an unpaired trailing node is carried
//!   up unchanged
//! - An audit trail lists sibling hashes from a leaf up to the root

mod builder;
mod merkle;
mod node;
mod proof;

pub use merkle::MerkleTree;
pub use node::{Node, NodeId};
pub use proof::{replay, verify_audit_with};
