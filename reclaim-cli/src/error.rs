//! Structured error types for the Reclaim CLI
//!
//! Domain-specific error types wrapping the ledger library's errors,
//! so command handlers return typed failures instead of stringly
//! results.

use thiserror::Error;

/// Reclaim CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    // Ledger operations
    #[error("Seal failed: {0}")]
    Seal(#[from] lib_ledger::SealError),

    #[error("Ledger storage error: {0}")]
    Storage(#[from] lib_ledger::StorageError),

    #[error("User directory error: {0}")]
    Directory(#[from] lib_ledger::DirectoryError),

    #[error("Chain verification failed: {0}")]
    Verification(#[from] lib_ledger::ChainValidateError),

    // Serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // I/O operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

impl From<String> for CliError {
    fn from(s: String) -> Self {
        CliError::Other(s)
    }
}

impl From<&str> for CliError {
    fn from(s: &str) -> Self {
        CliError::Other(s.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
