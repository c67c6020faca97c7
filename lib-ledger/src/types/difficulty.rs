//! Difficulty target for proof-of-work sealing
//!
//! The sealing target is expressed as the number of leading zero
//! hexadecimal characters the record digest must carry. The system
//! seals at difficulty 2 (expected ~256 hash attempts), which keeps
//! the search sub-second while still making casual tampering visible.

use serde::{Deserialize, Serialize};

use crate::types::digest::{Digest, DIGEST_HEX_LEN};

/// Difficulty representation for proof-of-work sealing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u32);

impl Difficulty {
    /// Create a difficulty requiring `leading_zeros` hex characters.
    ///
    /// Values above the digest length are clamped; a digest cannot have
    /// more leading zeros than it has characters.
    pub fn new(leading_zeros: u32) -> Self {
        Difficulty(leading_zeros.min(DIGEST_HEX_LEN as u32))
    }

    /// Number of required leading zero hex characters
    pub fn leading_zeros(&self) -> u32 {
        self.0
    }

    /// Check if a digest meets this difficulty target
    pub fn is_met_by(&self, digest: &Digest) -> bool {
        digest.leading_zero_hex() >= self.0
    }

    /// The difficulty this system seals at
    pub fn standard() -> Self {
        Difficulty(crate::config::DEFAULT_DIFFICULTY)
    }

    /// Hardest expressible difficulty (every character zero)
    pub fn maximum() -> Self {
        Difficulty(DIGEST_HEX_LEN as u32)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::standard()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
