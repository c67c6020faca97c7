//! Ledger Record Module
//!
//! Defines the chain record structures and the sealing search that
//! produces them.

pub mod core;
pub mod sealing;

pub use core::{CanonicalError, ClaimSubject, LedgerRecord, VerificationStatus};
pub use sealing::RecordBuilder;
