//! Sled-based LedgerStore implementation
//!
//! The persistent backend for the claim ledger. Records live in a
//! single tree keyed by chain index; the head is the record at the
//! maximum key, read directly from the tree on every call so it is
//! always consistent with the last successful append. Appends go
//! through `compare_and_swap` so two writers racing for the same index
//! cannot both win.

use std::path::Path;

use sled::{Db, Tree};

use super::{LedgerStore, StorageError, StorageResult};
use crate::record::LedgerRecord;

// Tree names are protocol. Changing them orphans existing ledgers.
const TREE_RECORDS: &str = "records_by_index";

/// Key for the records tree: index (8 bytes BE) → record bytes
///
/// Big-endian keeps lexicographic key order equal to chain order, so
/// the head is simply the last key and iteration walks the chain in
/// ascending index order.
#[inline]
fn record_index_key(index: u64) -> [u8; 8] {
    index.to_be_bytes()
}

/// Parse a chain index back out of a records-tree key
#[inline]
fn parse_record_index_key(key: &[u8]) -> StorageResult<u64> {
    let bytes: [u8; 8] = key
        .try_into()
        .map_err(|_| StorageError::CorruptedData("Invalid record key length".to_string()))?;
    Ok(u64::from_be_bytes(bytes))
}

/// Sled-based implementation of [`LedgerStore`]
pub struct SledStore {
    db: Db,
    records: Tree,
}

impl std::fmt::Debug for SledStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledStore").finish_non_exhaustive()
    }
}

impl SledStore {
    /// Open or create a store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let db = sled::open(path).map_err(|e| StorageError::Database(e.to_string()))?;
        Self::with_db(db)
    }

    /// Open a temporary store that is discarded on drop (for testing)
    pub fn open_temporary() -> StorageResult<Self> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Self::with_db(db)
    }

    fn with_db(db: Db) -> StorageResult<Self> {
        let records = db
            .open_tree(TREE_RECORDS)
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(Self { db, records })
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> StorageResult<()> {
        self.db
            .flush()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(())
    }

    /// Helper to serialize a record
    fn serialize(record: &LedgerRecord) -> StorageResult<Vec<u8>> {
        bincode::serialize(record).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Helper to deserialize a record
    fn deserialize(bytes: &[u8]) -> StorageResult<LedgerRecord> {
        bincode::deserialize(bytes).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Current maximum chain index, or None when the ledger is empty.
    ///
    /// Read from the records tree itself rather than a cached meta
    /// entry, so it cannot go stale relative to the last append.
    fn max_index(&self) -> StorageResult<Option<u64>> {
        match self.records.last() {
            Ok(Some((key, _))) => Ok(Some(parse_record_index_key(&key)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::Database(e.to_string())),
        }
    }
}

impl LedgerStore for SledStore {
    fn head(&self) -> StorageResult<Option<LedgerRecord>> {
        match self.records.last() {
            Ok(Some((_, bytes))) => Ok(Some(Self::deserialize(&bytes)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::Database(e.to_string())),
        }
    }

    fn get(&self, index: u64) -> StorageResult<Option<LedgerRecord>> {
        match self.records.get(record_index_key(index)) {
            Ok(Some(bytes)) => Ok(Some(Self::deserialize(&bytes)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::Database(e.to_string())),
        }
    }

    fn append(&self, record: &LedgerRecord) -> StorageResult<()> {
        let expected = self.max_index()?.map_or(1, |max| max + 1);
        if record.index < expected {
            return Err(StorageError::IndexOccupied(record.index));
        }
        if record.index != expected {
            return Err(StorageError::NonContiguousAppend {
                expected,
                actual: record.index,
            });
        }

        let value = Self::serialize(record)?;

        // Insert-if-absent: a concurrent writer that appended between
        // the expected-index check and here loses the swap.
        let swap = self
            .records
            .compare_and_swap(
                record_index_key(record.index),
                None as Option<&[u8]>,
                Some(value),
            )
            .map_err(|e| StorageError::Database(e.to_string()))?;
        if swap.is_err() {
            return Err(StorageError::IndexOccupied(record.index));
        }

        self.flush()
    }

    fn len(&self) -> StorageResult<u64> {
        Ok(self.records.len() as u64)
    }

    fn records(&self) -> StorageResult<Vec<LedgerRecord>> {
        let mut records = Vec::with_capacity(self.records.len());
        for entry in self.records.iter() {
            let (_, bytes) = entry.map_err(|e| StorageError::Database(e.to_string()))?;
            records.push(Self::deserialize(&bytes)?);
        }
        Ok(records)
    }
}
