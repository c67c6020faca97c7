//! Core ledger types module
//!
//! Contains the digest and difficulty primitives shared by record
//! construction, sealing, and chain validation.

pub mod difficulty;
pub mod digest;

// Explicit re-exports from digest module
pub use digest::{Digest, DIGEST_HEX_LEN};

// Explicit re-exports from difficulty module
pub use difficulty::Difficulty;
