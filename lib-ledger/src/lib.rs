//! Reclaim Ledger Package
//!
//! Core implementation of the claim-resolution ledger: an append-only,
//! hash-chained sequence of records, each sealed with a bounded
//! proof-of-work search. A record is created once per resolved claim
//! (a found item matched to a successful claim) and is immutable from
//! then on. Identity resolution and persistence are delegated to the
//! `identity` and `storage` seams so callers can plug in their own
//! backends.

pub mod config;
pub mod engine;
pub mod identity;
pub mod record;
pub mod storage;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export core types for convenience
pub use types::{Digest, Difficulty, DIGEST_HEX_LEN};

pub use record::{
    CanonicalError, ClaimSubject, LedgerRecord, RecordBuilder, VerificationStatus,
};

pub use engine::{SealEngine, SealError};

pub use identity::{
    DirectoryError, IdentityDirectory, IdentityProfile, JsonDirectory, MemoryDirectory,
};

pub use storage::{LedgerStore, MemoryStore, SledStore, StorageError, StorageResult};

pub use validation::{
    verify_chain, verify_record, ChainValidateError, ChainValidateResult,
};

pub use config::{SealConfig, DEFAULT_ATTEMPT_CEILING, DEFAULT_DIFFICULTY};

pub use utils::time::current_timestamp;
