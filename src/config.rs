//! Tree configuration
//!
//! Selects the hash function at runtime. Configs are plain JSON:
//!
//! ```json
//! { "hash": "sha256" }
//! ```

use crate::hasher::{Blake3Hasher, Hasher, Sha256Hasher};
use crate::shared::SharedTree;
use crate::tree::MerkleTree;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Supported hash algorithms
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    #[default]
    Blake3,
    Sha256,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Blake3 => "blake3",
            HashAlgorithm::Sha256 => "sha256",
        }
    }

    /// Instantiate the hasher for this algorithm
    pub fn hasher(&self) -> Box<dyn Hasher> {
        match self {
            HashAlgorithm::Blake3 => Box::new(Blake3Hasher),
            HashAlgorithm::Sha256 => Box::new(Sha256Hasher),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blake3" => Ok(HashAlgorithm::Blake3),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            other => Err(Error::Config(format!("Unknown hash algorithm: {}", other))),
        }
    }
}

/// Configuration for building trees
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    /// Hash function for parent nodes and proof replay
    pub hash: HashAlgorithm,
}

impl TreeConfig {
    pub fn new(hash: HashAlgorithm) -> Self {
        TreeConfig { hash }
    }

    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn hasher(&self) -> Box<dyn Hasher> {
        self.hash.hasher()
    }

    /// Create an empty tree using the configured hasher
    pub fn new_tree(&self) -> MerkleTree<Box<dyn Hasher>> {
        MerkleTree::with_hasher(self.hasher())
    }

    /// Create an empty shared tree using the configured hasher
    pub fn new_shared_tree(&self) -> SharedTree<dyn Hasher> {
        SharedTree::with_hasher(Arc::from(self.hasher()))
    }
}
