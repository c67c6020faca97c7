//! Core record structures
//!
//! Defines the fundamental record data structures of the claim ledger.
//!
//! # LedgerRecord Structure and Digest Commitment
//!
//! The [`LedgerRecord`] struct is the chain's unit of storage. Its fields
//! fall into two categories:
//!
//! ## Digest-Critical Fields (included in the record digest)
//!
//! These fields form the canonical preimage hashed by the sealing search
//! and MUST be reproduced bit-for-bit by any verifier. Changing any of
//! them changes the record digest, breaking the chain:
//!
//! | Field | Purpose |
//! |-------|---------|
//! | `index` | Canonical position of this record in the chain (first is 1) |
//! | `previous_digest` | Links this record to its predecessor; sentinel for the first |
//! | `timestamp` | Sealing time, fixed once per seal |
//! | `item_id` .. `proof_file_url` | The matched transaction being recorded |
//! | `nonce` | Counter found by the proof-of-work search |
//!
//! ## Informational Fields (NOT included in the digest)
//!
//! | Field | Purpose |
//! |-------|---------|
//! | `digest` | Cached result of the seal; not an input to itself |
//! | `difficulty` | Target the seal was searched against |
//! | `finder_address` / `loser_address` | Contact phone, display only |
//! | `verification_status` | Fixed to verified once sealed |
//! | `degraded` | True when the attempt ceiling was hit; determined by the search, so it cannot feed it |
//!
//! The preimage field order is frozen in [`Preimage`]'s declaration order.
//! Reordering those fields changes every digest on the chain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::IdentityProfile;
use crate::types::{Difficulty, Digest};

/// Canonical JSON encoding of the preimage failed.
///
/// Record fields are plain strings and integers, so this is not
/// expected outside of allocation failure.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct CanonicalError(#[from] serde_json::Error);

/// Descriptive attributes of a matched transaction, as known to the
/// lost-and-found system before identity resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSubject {
    /// Found item being returned
    pub item_id: String,
    /// Approved claim that triggered the seal
    pub claim_id: String,
    /// User who found and posted the item
    pub finder_id: String,
    /// User whose claim was approved
    pub loser_id: String,
    /// Item name as posted
    pub product_name: String,
    /// Where the item was found
    pub location: String,
    /// Item category
    pub category: String,
    /// Free-text message the claimant attached, if any
    pub claim_message: Option<String>,
    /// Reference to the uploaded ownership proof, if any
    pub proof_file_url: Option<String>,
}

/// Status of a record in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Record was sealed and appended
    Verified,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::Verified => write!(f, "verified"),
        }
    }
}

/// An immutable, sequentially-indexed chain record for one resolved claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Chain position, strictly increasing from 1
    pub index: u64,
    /// Digest of the predecessor record, or [`Digest::ZERO`] for the first
    pub previous_digest: Digest,
    /// Unix seconds at sealing time
    pub timestamp: u64,
    /// Found item being returned
    pub item_id: String,
    /// Approved claim that triggered the seal
    pub claim_id: String,
    /// User who found the item
    pub finder_id: String,
    /// User whose claim was approved
    pub loser_id: String,
    /// Finder contact email, resolved at sealing time
    pub finder_email: String,
    /// Claimant contact email, resolved at sealing time
    pub loser_email: String,
    /// Finder display name, resolved at sealing time
    pub finder_name: String,
    /// Claimant display name, resolved at sealing time
    pub loser_name: String,
    /// Finder contact phone, or "N/A"
    pub finder_address: String,
    /// Claimant contact phone, or "N/A"
    pub loser_address: String,
    /// Item name as posted
    pub product_name: String,
    /// Where the item was found
    pub location: String,
    /// Item category
    pub category: String,
    /// Free-text message the claimant attached, if any
    pub claim_message: Option<String>,
    /// Reference to the uploaded ownership proof, if any
    pub proof_file_url: Option<String>,
    /// Counter found by the proof-of-work search
    pub nonce: u64,
    /// Leading-zero target the seal was searched against
    pub difficulty: Difficulty,
    /// SHA-256 of the canonical preimage at the winning nonce
    pub digest: Digest,
    /// Fixed to verified once sealed
    pub verification_status: VerificationStatus,
    /// True when the attempt ceiling was hit before the target was met
    pub degraded: bool,
}

impl LedgerRecord {
    /// Recompute the digest from the stored fields and nonce.
    ///
    /// Verifiers compare the result against the stored `digest`; any
    /// mutation of a digest-critical field makes them diverge.
    pub fn recompute_digest(&self) -> Result<Digest, CanonicalError> {
        Preimage {
            index: self.index,
            previous_digest: &self.previous_digest,
            timestamp: self.timestamp,
            item_id: &self.item_id,
            claim_id: &self.claim_id,
            finder_id: &self.finder_id,
            loser_id: &self.loser_id,
            finder_email: &self.finder_email,
            loser_email: &self.loser_email,
            finder_name: &self.finder_name,
            loser_name: &self.loser_name,
            product_name: &self.product_name,
            location: &self.location,
            category: &self.category,
            claim_message: self.claim_message.as_deref(),
            proof_file_url: self.proof_file_url.as_deref(),
            nonce: self.nonce,
        }
        .digest()
    }

    /// Check the stored digest against the record's difficulty target
    pub fn meets_difficulty(&self) -> bool {
        self.difficulty.is_met_by(&self.digest)
    }
}

/// Canonical digest preimage.
///
/// Field order and wire names are frozen; serde_json emits struct
/// fields in declaration order, which is what makes this encoding
/// deterministic and independently reproducible.
#[derive(Debug, Serialize)]
pub(crate) struct Preimage<'a> {
    #[serde(rename = "block_index")]
    pub(crate) index: u64,
    #[serde(rename = "previous_hash")]
    pub(crate) previous_digest: &'a Digest,
    pub(crate) timestamp: u64,
    pub(crate) item_id: &'a str,
    pub(crate) claim_id: &'a str,
    pub(crate) finder_id: &'a str,
    pub(crate) loser_id: &'a str,
    pub(crate) finder_email: &'a str,
    pub(crate) loser_email: &'a str,
    pub(crate) finder_name: &'a str,
    pub(crate) loser_name: &'a str,
    pub(crate) product_name: &'a str,
    pub(crate) location: &'a str,
    pub(crate) category: &'a str,
    pub(crate) claim_message: Option<&'a str>,
    pub(crate) proof_file_url: Option<&'a str>,
    pub(crate) nonce: u64,
}

impl Preimage<'_> {
    /// SHA-256 over the canonical JSON encoding
    pub(crate) fn digest(&self) -> Result<Digest, CanonicalError> {
        let bytes = serde_json::to_vec(self)?;
        Ok(Digest::sha256(&bytes))
    }
}

/// Contact phone as stored on the record, with the display default
pub(crate) fn contact_address(profile: &IdentityProfile) -> String {
    profile
        .phone
        .clone()
        .unwrap_or_else(|| "N/A".to_string())
}
