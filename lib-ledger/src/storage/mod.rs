//! Ledger Storage Layer
//!
//! This module defines the storage contract for the claim ledger.
//! All persistence operations MUST go through the [`LedgerStore`] trait.
//!
//! # Data Model Invariants
//!
//! 1. **Records are append-only** - Once written, records are never
//!    modified or deleted. The only write operation is `append`.
//!
//! 2. **Indices are dense and start at 1** - `append` rejects an index
//!    that is already occupied or not contiguous with the current head.
//!    Two writers racing for the same position cannot both win; the
//!    loser observes [`StorageError::IndexOccupied`].
//!
//! 3. **`head` is strongly consistent** - After a successful `append`,
//!    `head` from the same process returns the appended record. No
//!    cached latest-index is consulted.
//!
//! # Design Principles
//!
//! - Engine code MUST NOT know which database backend is used
//! - Key encoding is protocol - indices are fixed-width big-endian so
//!   lexicographic key order equals numeric chain order

pub mod memory;
pub mod sled_store;

use thiserror::Error;

use crate::record::LedgerRecord;

// Re-export the store implementations
pub use memory::MemoryStore;
pub use sled_store::SledStore;

/// Storage error
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Index {0} already occupied")]
    IndexOccupied(u64),

    #[error("Non-contiguous append: expected index {expected}, got {actual}")]
    NonContiguousAppend { expected: u64, actual: u64 },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Corrupted data: {0}")]
    CorruptedData(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage contract for the append-only chain
pub trait LedgerStore: Send + Sync {
    /// Record with the maximum index, or `None` when the ledger is empty
    fn head(&self) -> StorageResult<Option<LedgerRecord>>;

    /// Fetch a record by chain index
    fn get(&self, index: u64) -> StorageResult<Option<LedgerRecord>>;

    /// Append a record as the new chain head.
    ///
    /// Insert-if-absent: an occupied index is rejected with
    /// [`StorageError::IndexOccupied`], a gap with
    /// [`StorageError::NonContiguousAppend`].
    fn append(&self, record: &LedgerRecord) -> StorageResult<()>;

    /// Number of records in the ledger
    fn len(&self) -> StorageResult<u64>;

    /// Whether the ledger is empty
    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// All records in ascending index order
    fn records(&self) -> StorageResult<Vec<LedgerRecord>>;
}
