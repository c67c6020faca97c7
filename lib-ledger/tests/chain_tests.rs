//! End-to-end chain properties over the in-memory store.
//!
//! Each test seals through the real engine with a populated identity
//! directory, then checks the chain the way an independent verifier
//! would.

use lib_ledger::{
    verify_chain, ChainValidateError, ClaimSubject, Difficulty, Digest, IdentityProfile,
    MemoryDirectory, MemoryStore, SealConfig, SealEngine, DIGEST_HEX_LEN,
};

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

fn engine() -> SealEngine<MemoryStore, MemoryDirectory> {
    SealEngine::new(MemoryStore::new(), directory())
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
fn chain_linkage_over_sequential_seals() {
    let engine = engine();
    for n in 1..=5 {
        engine.seal_record(subject(n)).unwrap();
    }

    let records = engine.records().unwrap();
    assert_eq!(records.len(), 5);
    for pair in records.windows(2) {
        assert_eq!(pair[1].previous_digest, pair[0].digest);
    }
}

#[test]
fn genesis_sentinel_has_digest_length() {
    let engine = engine();
    let first = engine.seal_record(subject(1)).unwrap();

    let sentinel = first.previous_digest.to_hex();
    assert_eq!(sentinel.len(), DIGEST_HEX_LEN);
    assert!(sentinel.chars().all(|c| c == '0'));
}

#[test]
fn digest_recomputes_from_stored_fields() {
    let engine = engine();
    let mut with_options = subject(1);
    with_options.claim_message = Some("blue leather, cards inside".to_string());
    with_options.proof_file_url = Some("proofs/receipt-1.jpg".to_string());
    engine.seal_record(with_options).unwrap();
    engine.seal_record(subject(2)).unwrap();

    for record in engine.records().unwrap() {
        assert_eq!(record.recompute_digest().unwrap(), record.digest);
    }
}

#[test]
fn full_seals_meet_difficulty() {
    let engine = engine();
    for n in 1..=3 {
        let record = engine.seal_record(subject(n)).unwrap();
        assert!(!record.degraded);
        assert!(record.meets_difficulty());
        assert!(record.digest.to_hex().starts_with("00"));
    }
}

#[test]
fn indices_are_monotonic_without_gaps() {
    let engine = engine();
    for n in 1..=8 {
        engine.seal_record(subject(n)).unwrap();
    }

    let indices: Vec<u64> = engine
        .records()
        .unwrap()
        .iter()
        .map(|r| r.index)
        .collect();
    assert_eq!(indices, (1..=8).collect::<Vec<u64>>());
}

#[test]
fn attempt_ceiling_yields_degraded_seal() {
    // Maximum difficulty is unreachable within the standard ceiling, so
    // the search must come back degraded instead of looping.
    let config = SealConfig::new(Difficulty::maximum(), SealConfig::default().attempt_ceiling);
    let engine = SealEngine::with_config(MemoryStore::new(), directory(), config);

    let record = engine.seal_record(subject(1)).unwrap();
    assert!(record.degraded);
    assert_eq!(record.nonce, SealConfig::default().attempt_ceiling - 1);
    assert!(!record.meets_difficulty());
    // The record is still appended and still recomputes
    assert_eq!(engine.head().unwrap().unwrap(), record);
    assert_eq!(record.recompute_digest().unwrap(), record.digest);
}

#[test]
fn concrete_wallet_scenario() {
    let engine = engine();

    let first = engine
        .seal_record(ClaimSubject {
            item_id: "i1".to_string(),
            claim_id: "c1".to_string(),
            finder_id: "u1".to_string(),
            loser_id: "u2".to_string(),
            product_name: "Wallet".to_string(),
            location: "Library".to_string(),
            category: "Accessories".to_string(),
            claim_message: None,
            proof_file_url: None,
        })
        .unwrap();

    assert_eq!(first.index, 1);
    assert_eq!(first.previous_digest, Digest::ZERO);
    assert!(first.digest.to_hex().starts_with("00"));

    let second = engine.seal_record(subject(2)).unwrap();
    assert_eq!(second.index, 2);
    assert_eq!(second.previous_digest, first.digest);
}

#[test]
fn verify_chain_round_trip() {
    let engine = engine();
    for n in 1..=4 {
        engine.seal_record(subject(n)).unwrap();
    }

    let records = engine.records().unwrap();
    assert!(verify_chain(&records).is_ok());

    // Mutating any single non-digest field fails at that index
    let mut tampered = records.clone();
    tampered[2].loser_email = "impostor@example.com".to_string();
    let err = verify_chain(&tampered).unwrap_err();
    assert!(matches!(err, ChainValidateError::DigestMismatch { index: 3, .. }));

    let mut tampered = records.clone();
    tampered[0].timestamp += 1;
    assert_eq!(verify_chain(&tampered).unwrap_err().index(), 1);

    let mut tampered = records;
    tampered[3].nonce += 1;
    assert_eq!(verify_chain(&tampered).unwrap_err().index(), 4);
}

#[test]
fn resolution_failure_performs_no_mutation() {
    let engine = engine();
    engine.seal_record(subject(1)).unwrap();

    let mut bad = subject(2);
    bad.loser_id = "ghost".to_string();
    assert!(engine.seal_record(bad).is_err());

    let records = engine.records().unwrap();
    assert_eq!(records.len(), 1);
    assert!(verify_chain(&records).is_ok());
}
