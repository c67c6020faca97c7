//! In-memory LedgerStore implementation
//!
//! Ordered map behind a mutex. Used by tests and by callers that keep
//! the ledger ephemeral.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use super::{LedgerStore, StorageError, StorageResult};
use crate::record::LedgerRecord;

/// In-memory implementation of [`LedgerStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<u64, LedgerRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn head(&self) -> StorageResult<Option<LedgerRecord>> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.values().next_back().cloned())
    }

    fn get(&self, index: u64) -> StorageResult<Option<LedgerRecord>> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(&index).cloned())
    }

    fn append(&self, record: &LedgerRecord) -> StorageResult<()> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);

        let expected = records.keys().next_back().map_or(1, |max| max + 1);
        if records.contains_key(&record.index) {
            return Err(StorageError::IndexOccupied(record.index));
        }
        if record.index != expected {
            return Err(StorageError::NonContiguousAppend {
                expected,
                actual: record.index,
            });
        }

        records.insert(record.index, record.clone());
        Ok(())
    }

    fn len(&self) -> StorageResult<u64> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.len() as u64)
    }

    fn records(&self) -> StorageResult<Vec<LedgerRecord>> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.values().cloned().collect())
    }
}
