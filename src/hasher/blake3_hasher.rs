//! BLAKE3 hasher, the default

use super::Hasher;
use crate::model::Hash;

/// BLAKE3 with a 32-byte output
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Hasher;

impl Blake3Hasher {
    pub fn new() -> Self {
        Blake3Hasher
    }
}

impl Hasher for Blake3Hasher {
    fn digest(&self, data: &[u8]) -> Hash {
        Hash::from(*blake3::hash(data).as_bytes())
    }

    fn combine(&self, left: &Hash, right: &Hash) -> Hash {
        // Streams both halves instead of allocating the concatenation
        let mut hasher = blake3::Hasher::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Hash::from(*hasher.finalize().as_bytes())
    }

    fn name(&self) -> &str {
        "blake3"
    }
}
