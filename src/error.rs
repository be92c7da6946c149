//! Error types for merkle_audit

use thiserror::Error;

/// Result type alias for merkle_audit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building trees or generating proofs
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Cannot build a tree from zero leaves")]
    EmptyInput,

    #[error("Leaf has no parent; a single-leaf tree has no audit proof")]
    NoParent,

    #[error("Parent mismatch: node {child} is not a child of node {parent}")]
    ParentMismatch { parent: usize, child: usize },

    #[error("Leaf not found: {0}")]
    LeafNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
