//! Audit trail entries

use super::Hash;
use serde::{Deserialize, Serialize};

/// Which side of the running hash a sibling is concatenated on during replay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Sibling goes on the left: `hash(sibling ‖ running)`
    LeftBranch,
    /// Sibling goes on the right: `hash(running ‖ sibling)`
    RightBranch,
}

/// One step of an audit trail: a sibling hash and the side it sits on
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofHash {
    pub hash: Hash,
    pub direction: Direction,
}

impl ProofHash {
    pub fn new(hash: Hash, direction: Direction) -> Self {
        ProofHash { hash, direction }
    }
}
