//! The merkle tree container

use super::{Node, NodeId};
use crate::hasher::{Blake3Hasher, Hasher};
use crate::model::Hash;
use std::fmt;

/// A binary merkle tree over an ordered list of leaf hashes
///
/// The tree owns every node in a flat arena. Leaves are appended first and
/// then folded into parent layers by [`MerkleTree::build`]; after a build the
/// graph is immutable until the next build replaces it wholesale.
///
/// Leaf order is significant and duplicate leaves occupy distinct positions.
#[derive(Clone)]
pub struct MerkleTree<H: Hasher = Blake3Hasher> {
    pub(crate) hasher: H,
    pub(crate) nodes: Vec<Node>,
    pub(crate) leaves: Vec<NodeId>,
    pub(crate) root: Option<NodeId>,
}

impl MerkleTree<Blake3Hasher> {
    /// Create an empty tree using BLAKE3
    pub fn new() -> Self {
        Self::with_hasher(Blake3Hasher)
    }
}

impl Default for MerkleTree<Blake3Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hasher> MerkleTree<H> {
    /// Create an empty tree that hashes with `hasher`
    pub fn with_hasher(hasher: H) -> Self {
        MerkleTree {
            hasher,
            nodes: Vec::new(),
            leaves: Vec::new(),
            root: None,
        }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Root node id, if the tree has been built
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Root hash, if the tree has been built
    pub fn root_hash(&self) -> Option<&Hash> {
        self.root.and_then(|id| self.node(id)).map(Node::hash)
    }

    /// Leaf ids in insertion order
    pub fn leaf_ids(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Leaf nodes in insertion order
    pub fn leaves(&self) -> impl Iterator<Item = &Node> + '_ {
        self.leaves.iter().filter_map(|id| self.node(*id))
    }

    /// Copy out the leaf hashes in insertion order
    pub fn leaf_hashes(&self) -> Vec<Hash> {
        self.leaves().map(|leaf| leaf.hash().clone()).collect()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Check if a root has been built
    pub fn is_built(&self) -> bool {
        self.root.is_some()
    }

    /// Find the first leaf whose hash matches `hash` byte for byte
    pub fn find_leaf(&self, hash: impl AsRef<[u8]>) -> Option<NodeId> {
        let hash = hash.as_ref();
        self.leaves
            .iter()
            .copied()
            .find(|id| self.node(*id).is_some_and(|leaf| leaf.hash().as_bytes() == hash))
    }

    /// Number of parent hops from the first leaf to the root
    ///
    /// Every leaf sits at the same depth, `ceil(log2(leaf_count))`, because
    /// unpaired nodes are carried up rather than left behind.
    pub fn height(&self) -> Option<usize> {
        self.root?;
        let mut current = *self.leaves.first()?;
        let mut hops = 0;
        while let Some(parent) = self.node(current).and_then(Node::parent) {
            current = parent;
            hops += 1;
        }
        Some(hops)
    }
}

impl<H: Hasher> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("hasher", &self.hasher.name())
            .field("leaves", &self.leaves.len())
            .field("nodes", &self.nodes.len())
            .field("root", &self.root_hash())
            .finish()
    }
}
