//! Tree node types

use crate::model::Hash;
use std::fmt;

/// Index of a node inside the tree that owns it
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex in the merkle tree
///
/// Nodes live in the tree's arena:
/// - `left`/`right` point down to children owned by the same arena
/// - `parent` is a back-reference only, set once when the parent is created
///
/// A node with no children is a leaf. A node with only a `left` child is a
/// carry node: it promotes an unpaired trailing node one level up and its
/// hash is the child's hash, unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) hash: Hash,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// Create a leaf node
    pub fn leaf(hash: Hash) -> Self {
        Node {
            hash,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// Create an internal node over already-hashed children
    ///
    /// The caller supplies the combined hash; see `MerkleTree::new_parent`.
    pub(crate) fn internal(hash: Hash, left: NodeId, right: Option<NodeId>) -> Self {
        Node {
            hash,
            left: Some(left),
            right,
            parent: None,
        }
    }

    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Check if this node is a pass-through parent of a single child
    pub fn is_carry(&self) -> bool {
        self.left.is_some() && self.right.is_none()
    }

    /// Check if `id` is one of this node's children
    pub fn has_child(&self, id: NodeId) -> bool {
        self.left == Some(id) || self.right == Some(id)
    }
}
