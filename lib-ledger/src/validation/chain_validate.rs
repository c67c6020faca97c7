//! Chain Validation
//!
//! Re-verification of sealed records. Every check here recomputes from
//! record contents alone; nothing is trusted from the seal path.
//!
//! # Validation Levels
//!
//! 1. **Linkage** - previous digest equals predecessor digest, sentinel
//!    for the first record
//! 2. **Continuity** - indices consecutive, starting at 1
//! 3. **Integrity** - stored digest recomputes from fields and nonce
//! 4. **Difficulty** - leading-zero target met, unless the record is a
//!    degraded seal (ceiling hit), where only recomputation applies

use crate::record::LedgerRecord;
use crate::types::Digest;

use super::errors::{ChainValidateError, ChainValidateResult};

/// Validate a single record against its expected predecessor digest.
///
/// `expected_previous` is the predecessor's digest, or [`Digest::ZERO`]
/// when the record is the first of the chain.
pub fn verify_record(
    record: &LedgerRecord,
    expected_previous: &Digest,
) -> ChainValidateResult<()> {
    if record.previous_digest != *expected_previous {
        if record.index == 1 {
            return Err(ChainValidateError::GenesisSentinelMismatch {
                actual: record.previous_digest,
            });
        }
        return Err(ChainValidateError::BrokenLink {
            index: record.index,
            expected: *expected_previous,
            actual: record.previous_digest,
        });
    }

    let recomputed = record
        .recompute_digest()
        .map_err(|e| ChainValidateError::Canonical {
            index: record.index,
            reason: e.to_string(),
        })?;
    if recomputed != record.digest {
        return Err(ChainValidateError::DigestMismatch {
            index: record.index,
            stored: record.digest,
            recomputed,
        });
    }

    // A degraded seal hit the attempt ceiling; it never claimed to meet
    // the target, so only the recomputation check applies.
    if !record.degraded && !record.meets_difficulty() {
        return Err(ChainValidateError::DifficultyNotMet {
            index: record.index,
            difficulty: record.difficulty,
        });
    }

    Ok(())
}

/// Validate an ordered sequence of records as a complete chain.
///
/// An empty sequence is trivially valid. On failure the returned error
/// names the first offending record.
pub fn verify_chain(records: &[LedgerRecord]) -> ChainValidateResult<()> {
    let mut expected_previous = Digest::ZERO;
    let mut expected_index = 1;

    for record in records {
        if record.index != expected_index {
            return Err(ChainValidateError::IndexGap {
                index: record.index,
                expected: expected_index,
            });
        }
        verify_record(record, &expected_previous)?;

        expected_previous = record.digest;
        expected_index += 1;
    }

    Ok(())
}
