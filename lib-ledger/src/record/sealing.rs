//! Record sealing
//!
//! Builds a candidate record and runs the bounded proof-of-work search.
//! The search tries nonces `0..attempt_ceiling`; if none produces a
//! digest meeting the difficulty target, the last candidate is accepted
//! as a degraded seal rather than looping forever. The degraded record
//! keeps the last nonce actually hashed, so stored nonce and digest
//! always agree.

use crate::config::SealConfig;
use crate::identity::IdentityProfile;
use crate::record::core::{
    contact_address, CanonicalError, ClaimSubject, LedgerRecord, Preimage, VerificationStatus,
};
use crate::types::Digest;
use crate::utils::time::current_timestamp;

/// Record builder: fixes everything except the nonce, then seals
#[derive(Debug)]
pub struct RecordBuilder {
    index: u64,
    previous_digest: Digest,
    timestamp: u64,
    subject: ClaimSubject,
    finder: IdentityProfile,
    loser: IdentityProfile,
}

impl RecordBuilder {
    /// Create a builder for the next chain position.
    ///
    /// The timestamp is fixed here, once, and never regenerated during
    /// the search; every candidate and the stored record hash the same
    /// instant.
    pub fn new(
        index: u64,
        previous_digest: Digest,
        subject: ClaimSubject,
        finder: IdentityProfile,
        loser: IdentityProfile,
    ) -> Self {
        Self {
            index,
            previous_digest,
            timestamp: current_timestamp(),
            subject,
            finder,
            loser,
        }
    }

    /// Override the sealing timestamp (deterministic tests)
    pub fn timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Digest of the candidate record at the given nonce
    fn candidate_digest(&self, nonce: u64) -> Result<Digest, CanonicalError> {
        Preimage {
            index: self.index,
            previous_digest: &self.previous_digest,
            timestamp: self.timestamp,
            item_id: &self.subject.item_id,
            claim_id: &self.subject.claim_id,
            finder_id: &self.subject.finder_id,
            loser_id: &self.subject.loser_id,
            finder_email: &self.finder.email,
            loser_email: &self.loser.email,
            finder_name: &self.finder.full_name,
            loser_name: &self.loser.full_name,
            product_name: &self.subject.product_name,
            location: &self.subject.location,
            category: &self.subject.category,
            claim_message: self.subject.claim_message.as_deref(),
            proof_file_url: self.subject.proof_file_url.as_deref(),
            nonce,
        }
        .digest()
    }

    /// Run the bounded search and produce the sealed record.
    ///
    /// Returns a degraded record (never an error) when the ceiling is
    /// exhausted; the caller can distinguish the two outcomes through
    /// [`LedgerRecord::degraded`].
    pub fn seal(self, config: &SealConfig) -> Result<LedgerRecord, CanonicalError> {
        let ceiling = config.attempt_ceiling.max(1);

        let mut winning_nonce = 0;
        let mut winning_digest = Digest::ZERO;
        let mut sealed = false;

        for nonce in 0..ceiling {
            let digest = self.candidate_digest(nonce)?;
            winning_nonce = nonce;
            winning_digest = digest;
            if config.difficulty.is_met_by(&digest) {
                sealed = true;
                break;
            }
        }

        if !sealed {
            tracing::warn!(
                index = self.index,
                attempts = ceiling,
                difficulty = %config.difficulty,
                "seal search exhausted attempt ceiling, accepting degraded digest"
            );
        }

        let finder_address = contact_address(&self.finder);
        let loser_address = contact_address(&self.loser);

        Ok(LedgerRecord {
            index: self.index,
            previous_digest: self.previous_digest,
            timestamp: self.timestamp,
            item_id: self.subject.item_id,
            claim_id: self.subject.claim_id,
            finder_id: self.subject.finder_id,
            loser_id: self.subject.loser_id,
            finder_email: self.finder.email,
            loser_email: self.loser.email,
            finder_name: self.finder.full_name,
            loser_name: self.loser.full_name,
            finder_address,
            loser_address,
            product_name: self.subject.product_name,
            location: self.subject.location,
            category: self.subject.category,
            claim_message: self.subject.claim_message,
            proof_file_url: self.subject.proof_file_url,
            nonce: winning_nonce,
            difficulty: config.difficulty,
            digest: winning_digest,
            verification_status: VerificationStatus::Verified,
            degraded: !sealed,
        })
    }
}
