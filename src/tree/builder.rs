//! Folding leaves into a tree

use super::{MerkleTree, Node, NodeId};
use crate::hasher::Hasher;
use crate::model::Hash;
use crate::{Error, Result};
use tracing::{debug, trace};

impl<H: Hasher> MerkleTree<H> {
    /// Append a leaf hash, to be folded in by the next build
    ///
    /// The current root and proofs are unaffected; the new leaf has no
    /// parent until the tree is rebuilt.
    pub fn append_leaf(&mut self, hash: impl Into<Vec<u8>>) -> Result<NodeId> {
        let hash = Hash::new(hash)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::leaf(hash));
        self.leaves.push(id);
        Ok(id)
    }

    /// Rebuild the tree from the currently appended leaves
    pub fn build(&mut self) -> Result<Hash> {
        let hashes = self.leaf_hashes();
        self.build_tree(hashes)
    }

    /// Replace the leaf set with `leaves` and build a tree over it
    ///
    /// The whole node graph is replaced. On error the tree is left exactly
    /// as it was.
    pub fn build_tree<I>(&mut self, leaves: I) -> Result<Hash>
    where
        I: IntoIterator<Item = Hash>,
    {
        let mut nodes: Vec<Node> = leaves.into_iter().map(Node::leaf).collect();
        if nodes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let leaf_ids: Vec<NodeId> = (0..nodes.len()).map(NodeId).collect();
        let root = fold_layer(&self.hasher, &mut nodes, &leaf_ids, 0);
        let root_hash = nodes[root.0].hash().clone();

        self.nodes = nodes;
        self.leaves = leaf_ids;
        self.root = Some(root);

        debug!(
            hasher = self.hasher.name(),
            leaves = self.leaves.len(),
            nodes = self.nodes.len(),
            height = self.height().unwrap_or_default(),
            root = %root_hash.short(),
            "built merkle tree"
        );

        Ok(root_hash)
    }
}

/// Fold one layer into the next until a single node remains
fn fold_layer<H: Hasher>(hasher: &H, nodes: &mut Vec<Node>, layer: &[NodeId], depth: usize) -> NodeId {
    if let [single] = layer {
        return *single;
    }

    let next: Vec<NodeId> = layer
        .chunks(2)
        .map(|pair| new_parent(hasher, nodes, pair[0], pair.get(1).copied()))
        .collect();

    trace!(depth, width = layer.len(), next_width = next.len(), "folded layer");
    fold_layer(hasher, nodes, &next, depth + 1)
}

/// Create the parent of `left` and (optionally) `right`
///
/// With two children the parent hash is `hash(left ‖ right)`. An unpaired
/// trailing node gets a carry parent whose hash is the child's hash,
/// unchanged: no duplication, no self-hashing. Proofs depend on this exact
/// policy, so any compatible implementation must carry the same way.
fn new_parent<H: Hasher>(
    hasher: &H,
    nodes: &mut Vec<Node>,
    left: NodeId,
    right: Option<NodeId>,
) -> NodeId {
    let hash = match right {
        Some(right) => hasher.combine(nodes[left.0].hash(), nodes[right.0].hash()),
        None => nodes[left.0].hash().clone(),
    };

    let id = NodeId(nodes.len());
    nodes.push(Node::internal(hash, left, right));

    nodes[left.0].parent = Some(id);
    if let Some(right) = right {
        nodes[right.0].parent = Some(id);
    }
    id
}
