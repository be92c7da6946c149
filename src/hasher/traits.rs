//! Hasher trait definition

use crate::model::Hash;
use std::sync::Arc;

/// The hash function a tree is built with
///
/// Implementations must be deterministic and produce a fixed output
/// length. The tree never assumes a particular algorithm.
pub trait Hasher: Send + Sync {
    /// Hash arbitrary bytes
    fn digest(&self, data: &[u8]) -> Hash;

    /// Combine two child hashes into a parent hash
    ///
    /// Default implementation hashes `left ‖ right`. Order is significant.
    fn combine(&self, left: &Hash, right: &Hash) -> Hash {
        self.digest(&left.concat(right))
    }

    /// Get the algorithm name/identifier
    fn name(&self) -> &str;
}

impl<H: Hasher + ?Sized> Hasher for Box<H> {
    fn digest(&self, data: &[u8]) -> Hash {
        (**self).digest(data)
    }

    fn combine(&self, left: &Hash, right: &Hash) -> Hash {
        (**self).combine(left, right)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<H: Hasher + ?Sized> Hasher for &H {
    fn digest(&self, data: &[u8]) -> Hash {
        (**self).digest(data)
    }

    fn combine(&self, left: &Hash, right: &Hash) -> Hash {
        (**self).combine(left, right)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<H: Hasher + ?Sized> Hasher for Arc<H> {
    fn digest(&self, data: &[u8]) -> Hash {
        (**self).digest(data)
    }

    fn combine(&self, left: &Hash, right: &Hash) -> Hash {
        (**self).combine(left, right)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
