//! Shared tree handle for concurrent readers
//!
//! A built tree is immutable, so any number of threads can prove and verify
//! against it at once. Rebuilding happens on a fresh tree which is then
//! swapped in; readers holding an older snapshot keep using it undisturbed.

use crate::hasher::{Blake3Hasher, Hasher};
use crate::model::{Hash, ProofHash};
use crate::tree::MerkleTree;
use crate::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// A tree that can be read from many threads and rebuilt by one at a time
pub struct SharedTree<H: Hasher + ?Sized = Blake3Hasher> {
    hasher: Arc<H>,
    current: RwLock<Arc<MerkleTree<Arc<H>>>>,
}

impl SharedTree<Blake3Hasher> {
    /// Create an empty shared tree using BLAKE3
    pub fn new() -> Self {
        Self::with_hasher(Arc::new(Blake3Hasher))
    }
}

impl Default for SharedTree<Blake3Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hasher + ?Sized> SharedTree<H> {
    /// Create an empty shared tree
    pub fn with_hasher(hasher: Arc<H>) -> Self {
        let tree = MerkleTree::with_hasher(Arc::clone(&hasher));
        SharedTree {
            hasher,
            current: RwLock::new(Arc::new(tree)),
        }
    }

    /// Get the tree as of now
    ///
    /// The snapshot stays valid after later rebuilds.
    pub fn snapshot(&self) -> Arc<MerkleTree<Arc<H>>> {
        Arc::clone(&self.current.read())
    }

    /// Root hash of the current tree
    pub fn root_hash(&self) -> Option<Hash> {
        self.snapshot().root_hash().cloned()
    }

    /// Build a new tree over `leaves` and swap it in
    pub fn rebuild<I>(&self, leaves: I) -> Result<Hash>
    where
        I: IntoIterator<Item = Hash>,
    {
        let mut tree = MerkleTree::with_hasher(Arc::clone(&self.hasher));
        let root = tree.build_tree(leaves)?;
        *self.current.write() = Arc::new(tree);
        debug!(root = %root.short(), "swapped in rebuilt tree");
        Ok(root)
    }

    /// Append leaves to the current set and rebuild
    ///
    /// Holds the write lock for the whole read-modify-write so concurrent
    /// extends do not lose each other's leaves.
    pub fn extend<I>(&self, leaves: I) -> Result<Hash>
    where
        I: IntoIterator<Item = Hash>,
    {
        let mut current = self.current.write();
        let mut all = current.leaf_hashes();
        all.extend(leaves);

        let mut tree = MerkleTree::with_hasher(Arc::clone(&self.hasher));
        let root = tree.build_tree(all)?;
        *current = Arc::new(tree);
        debug!(root = %root.short(), "extended and swapped in tree");
        Ok(root)
    }

    /// Audit proof against the current tree
    pub fn audit_proof(&self, target: impl AsRef<[u8]>) -> Result<Vec<ProofHash>> {
        self.snapshot().audit_proof(target)
    }

    /// Combined prove-and-replay against the current tree
    pub fn verify(&self, root_hash: impl AsRef<[u8]>, target: impl AsRef<[u8]>) -> bool {
        self.snapshot().verify(root_hash, target)
    }
}
