//! SHA-256 hasher

use super::Hasher;
use crate::model::Hash;
use sha2::{Digest, Sha256};

/// Plain SHA-256 (no domain-separation prefixes)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Sha256Hasher
    }
}

impl Hasher for Sha256Hasher {
    fn digest(&self, data: &[u8]) -> Hash {
        let bytes: [u8; 32] = Sha256::digest(data).into();
        Hash::from(bytes)
    }

    fn combine(&self, left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        let bytes: [u8; 32] = hasher.finalize().into();
        Hash::from(bytes)
    }

    fn name(&self) -> &str {
        "sha256"
    }
}
