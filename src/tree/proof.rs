//! Audit proof generation and replay

use super::{MerkleTree, NodeId};
use crate::hasher::Hasher;
use crate::model::{Direction, Hash, ProofHash};
use crate::{Error, Result};
use tracing::{debug, trace};

impl<H: Hasher> MerkleTree<H> {
    /// Generate the audit trail proving `target` is a leaf of this tree
    ///
    /// The trail is ordered leaf-to-root. If the same hash appears at
    /// several positions, the first one is proven.
    ///
    /// # Errors
    /// * `LeafNotFound` if no leaf matches `target`
    /// * `NoParent` if the leaf is the root (single-leaf tree) or was
    ///   appended after the last build
    pub fn audit_proof(&self, target: impl AsRef<[u8]>) -> Result<Vec<ProofHash>> {
        let target = target.as_ref();
        let leaf = self
            .find_leaf(target)
            .ok_or_else(|| Error::LeafNotFound(hex::encode(target)))?;

        let parent = self
            .node(leaf)
            .and_then(|node| node.parent())
            .ok_or(Error::NoParent)?;

        self.build_audit_trail(Vec::new(), Some(parent), leaf)
    }

    /// Walk from `child` up through `parent` to the root, appending sibling hashes
    ///
    /// Reaching `None` (above the root) ends the walk. Carry parents have no
    /// sibling to record and are stepped over.
    pub fn build_audit_trail(
        &self,
        mut trail: Vec<ProofHash>,
        parent: Option<NodeId>,
        child: NodeId,
    ) -> Result<Vec<ProofHash>> {
        let Some(parent) = parent else {
            return Ok(trail);
        };

        let mismatch = || Error::ParentMismatch {
            parent: parent.index(),
            child: child.index(),
        };
        let child_node = self.node(child).ok_or_else(mismatch)?;
        let parent_node = self.node(parent).ok_or_else(mismatch)?;
        if child_node.parent() != Some(parent) || !parent_node.has_child(child) {
            return Err(mismatch());
        }

        let (sibling, direction) = if parent_node.left() == Some(child) {
            (parent_node.right(), Direction::RightBranch)
        } else {
            (parent_node.left(), Direction::LeftBranch)
        };

        match sibling.and_then(|id| self.node(id)) {
            Some(sibling) => {
                trace!(parent = %parent, ?direction, sibling = %sibling.hash().short(), "audit step");
                trail.push(ProofHash::new(sibling.hash().clone(), direction));
            }
            None => trace!(parent = %parent, "skipping carry parent"),
        }

        self.build_audit_trail(trail, parent_node.parent(), parent)
    }

    /// Replay `trail` from `target` and compare against `root_hash`
    pub fn verify_audit(
        &self,
        root_hash: impl AsRef<[u8]>,
        target: impl AsRef<[u8]>,
        trail: &[ProofHash],
    ) -> bool {
        verify_audit_with(&self.hasher, root_hash, target, trail)
    }

    /// Prove and replay `target` against `root_hash` in one step
    ///
    /// Any failure to produce a proof (unknown leaf, single-leaf tree, broken
    /// links) yields `false`. Call [`MerkleTree::audit_proof`] directly to
    /// tell those cases apart.
    pub fn verify(&self, root_hash: impl AsRef<[u8]>, target: impl AsRef<[u8]>) -> bool {
        match self.audit_proof(target.as_ref()) {
            Ok(trail) => self.verify_audit(root_hash, target, &trail),
            Err(e) => {
                debug!(error = %e, "audit proof unavailable");
                false
            }
        }
    }
}

/// Recompute the root implied by `target` and `trail`
///
/// `RightBranch` entries are hashed as `running ‖ sibling`, `LeftBranch`
/// entries as `sibling ‖ running`.
pub fn replay<H: Hasher + ?Sized>(hasher: &H, target: &Hash, trail: &[ProofHash]) -> Hash {
    trail
        .iter()
        .fold(target.clone(), |running, step| match step.direction {
            Direction::RightBranch => hasher.combine(&running, &step.hash),
            Direction::LeftBranch => hasher.combine(&step.hash, &running),
        })
}

/// Check an audit trail without a tree
///
/// Returns true iff replaying `trail` from `target` lands byte for byte on
/// `root_hash`. An empty target never verifies.
pub fn verify_audit_with<H: Hasher + ?Sized>(
    hasher: &H,
    root_hash: impl AsRef<[u8]>,
    target: impl AsRef<[u8]>,
    trail: &[ProofHash],
) -> bool {
    match Hash::new(target.as_ref()) {
        Ok(target) => replay(hasher, &target, trail).as_bytes() == root_hash.as_ref(),
        Err(_) => false,
    }
}
