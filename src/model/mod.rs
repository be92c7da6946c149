//! Core value types for merkle_audit

mod hash;
mod proof;

pub use hash::Hash;
pub use proof::{Direction, ProofHash};
