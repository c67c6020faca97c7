//! Ledger Sealing Engine
//!
//! Orchestrates one seal per resolved claim: resolve the finder and
//! claimant identities, read the chain head, run the bounded
//! proof-of-work search, and append the result as the new head.
//!
//! The chain head is a single mutable pointer; the engine serializes
//! its own `seal_record` calls with an internal lock so two seals
//! cannot read the same head, and the store's insert-if-absent append
//! rejects any writer that lost the race anyway. Identity resolution
//! happens before anything else so a failed lookup leaves the chain
//! untouched.

use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::info;

use crate::config::SealConfig;
use crate::identity::{DirectoryError, IdentityDirectory};
use crate::record::{CanonicalError, ClaimSubject, LedgerRecord, RecordBuilder};
use crate::storage::{LedgerStore, StorageResult};
use crate::types::Digest;

/// Seal operation error
#[derive(Error, Debug)]
pub enum SealError {
    #[error("Identity resolution failed: {0}")]
    Resolution(#[from] DirectoryError),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("Canonical encoding failed: {0}")]
    Canonical(#[from] CanonicalError),
}

/// Sealing engine over a backing store and an identity directory
pub struct SealEngine<S, D> {
    store: S,
    directory: D,
    config: SealConfig,
    // Serializes head-read-then-append across seal_record calls
    seal_lock: Mutex<()>,
}

impl<S, D> std::fmt::Debug for SealEngine<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: LedgerStore, D: IdentityDirectory> SealEngine<S, D> {
    /// Create an engine sealing at the standard configuration
    pub fn new(store: S, directory: D) -> Self {
        Self::with_config(store, directory, SealConfig::default())
    }

    /// Create an engine with an explicit seal configuration
    pub fn with_config(store: S, directory: D, config: SealConfig) -> Self {
        Self {
            store,
            directory,
            config,
            seal_lock: Mutex::new(()),
        }
    }

    /// Seal a resolved claim as the new chain head.
    ///
    /// On success the returned record has already been appended. A
    /// failure at any step performs no chain mutation; retrying the
    /// whole call is safe, it reruns the search against a freshly
    /// fetched head.
    pub fn seal_record(&self, subject: ClaimSubject) -> Result<LedgerRecord, SealError> {
        let finder = self.directory.lookup(&subject.finder_id)?;
        let loser = self.directory.lookup(&subject.loser_id)?;

        let _guard = self.seal_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let head = self.store.head()?;
        let (index, previous_digest) = match &head {
            Some(head) => (head.index + 1, head.digest),
            None => (1, Digest::ZERO),
        };

        let record = RecordBuilder::new(index, previous_digest, subject, finder, loser)
            .seal(&self.config)?;

        self.store.append(&record)?;

        info!(
            index = record.index,
            digest = %record.digest,
            nonce = record.nonce,
            degraded = record.degraded,
            "sealed claim-resolution record"
        );

        Ok(record)
    }

    /// Current chain head, consistent with the engine's own appends
    pub fn head(&self) -> StorageResult<Option<LedgerRecord>> {
        self.store.head()
    }

    /// All records in ascending index order
    pub fn records(&self) -> StorageResult<Vec<LedgerRecord>> {
        self.store.records()
    }

    /// The engine's seal configuration
    pub fn config(&self) -> &SealConfig {
        &self.config
    }

    /// Direct access to the backing store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{IdentityProfile, MemoryDirectory};
    use crate::storage::{MemoryStore, StorageError};

    fn directory() -> MemoryDirectory {
        let mut directory = MemoryDirectory::new();
        directory.insert(
            "u1",
            IdentityProfile {
                email: "fay@example.com".to_string(),
                full_name: "Fay Finder".to_string(),
                phone: Some("555-0100".to_string()),
            },
        );
        directory.insert(
            "u2",
            IdentityProfile {
                email: "lou@example.com".to_string(),
                full_name: "Lou Loser".to_string(),
                phone: None,
            },
        );
        directory
    }

    fn subject(n: u64) -> ClaimSubject {
        ClaimSubject {
            item_id: format!("i{}", n),
            claim_id: format!("c{}", n),
            finder_id: "u1".to_string(),
            loser_id: "u2".to_string(),
            product_name: "Wallet".to_string(),
            location: "Library".to_string(),
            category: "Accessories".to_string(),
            claim_message: None,
            proof_file_url: None,
        }
    }

    #[test]
    fn test_first_seal_starts_chain() {
        let engine = SealEngine::new(MemoryStore::new(), directory());
        let record = engine.seal_record(subject(1)).unwrap();

        assert_eq!(record.index, 1);
        assert!(record.previous_digest.is_zero());
        assert_eq!(record.finder_name, "Fay Finder");
        assert_eq!(record.loser_email, "lou@example.com");
        assert_eq!(engine.head().unwrap().unwrap(), record);
    }

    #[test]
    fn test_sequential_seals_link() {
        let engine = SealEngine::new(MemoryStore::new(), directory());
        let first = engine.seal_record(subject(1)).unwrap();
        let second = engine.seal_record(subject(2)).unwrap();

        assert_eq!(second.index, 2);
        assert_eq!(second.previous_digest, first.digest);
    }

    #[test]
    fn test_unknown_finder_leaves_chain_untouched() {
        let engine = SealEngine::new(MemoryStore::new(), directory());
        let mut bad = subject(1);
        bad.finder_id = "missing".to_string();

        let err = engine.seal_record(bad).unwrap_err();
        assert!(matches!(
            err,
            SealError::Resolution(DirectoryError::NotFound(_))
        ));
        assert!(engine.head().unwrap().is_none());
        assert_eq!(engine.records().unwrap().len(), 0);
    }

    #[test]
    fn test_unknown_loser_leaves_chain_untouched() {
        let engine = SealEngine::new(MemoryStore::new(), directory());
        let mut bad = subject(1);
        bad.loser_id = "missing".to_string();

        assert!(engine.seal_record(bad).is_err());
        assert!(engine.head().unwrap().is_none());
    }

    #[test]
    fn test_append_conflict_surfaces_as_storage_error() {
        let engine = SealEngine::new(MemoryStore::new(), directory());
        engine.seal_record(subject(1)).unwrap();

        // A forked writer that derived its draft from an empty head
        let forked_engine = SealEngine::new(MemoryStore::new(), directory());
        let forked = forked_engine.seal_record(subject(1)).unwrap();

        let err = engine.store().append(&forked).unwrap_err();
        assert!(matches!(err, StorageError::IndexOccupied(1)));
    }
}
