//! Chain Validation
//!
//! Integrity checks over sealed records: linkage, index continuity,
//! digest recomputation, and difficulty satisfaction. Validation never
//! consults the store; it operates on an ordered sequence of records
//! so any holder of the chain can re-verify it independently.

pub mod chain_validate;
pub mod errors;

pub use chain_validate::{verify_chain, verify_record};
pub use errors::{ChainValidateError, ChainValidateResult};
