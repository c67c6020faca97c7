//! Validation Errors
//!
//! Error types for chain validation. Each variant carries the chain
//! index of the first offending record, so a failed verification pin-
//! points where the chain breaks.

use thiserror::Error;

use crate::types::{Difficulty, Digest};

/// Chain validation error
#[derive(Error, Debug)]
pub enum ChainValidateError {
    #[error("Record {index}: expected index {expected}")]
    IndexGap { index: u64, expected: u64 },

    #[error("Record 1 must carry the all-zero sentinel, got {actual}")]
    GenesisSentinelMismatch { actual: Digest },

    #[error("Record {index}: previous digest {actual} does not match predecessor digest {expected}")]
    BrokenLink {
        index: u64,
        expected: Digest,
        actual: Digest,
    },

    #[error("Record {index}: stored digest {stored} does not match recomputed {recomputed}")]
    DigestMismatch {
        index: u64,
        stored: Digest,
        recomputed: Digest,
    },

    #[error("Record {index}: digest does not carry {difficulty} leading zero hex characters")]
    DifficultyNotMet { index: u64, difficulty: Difficulty },

    #[error("Record {index}: canonical encoding failed: {reason}")]
    Canonical { index: u64, reason: String },
}

impl ChainValidateError {
    /// Chain index of the first offending record
    pub fn index(&self) -> u64 {
        match self {
            ChainValidateError::IndexGap { index, .. } => *index,
            ChainValidateError::GenesisSentinelMismatch { .. } => 1,
            ChainValidateError::BrokenLink { index, .. } => *index,
            ChainValidateError::DigestMismatch { index, .. } => *index,
            ChainValidateError::DifficultyNotMet { index, .. } => *index,
            ChainValidateError::Canonical { index, .. } => *index,
        }
    }
}

/// Result type for chain validation
pub type ChainValidateResult<T> = Result<T, ChainValidateError>;
