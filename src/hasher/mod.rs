//! Pluggable hash functions

mod blake3_hasher;
mod sha256_hasher;
mod traits;

pub use blake3_hasher::Blake3Hasher;
pub use sha256_hasher::Sha256Hasher;
pub use traits::Hasher;
