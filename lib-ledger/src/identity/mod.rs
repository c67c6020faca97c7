//! Identity Directory
//!
//! The sealing engine records resolved contact details (name, email,
//! phone) alongside the opaque user identifiers, so every record is
//! meaningful on its own even if the user database later changes. The
//! [`IdentityDirectory`] trait is the seam to whatever actually owns
//! user accounts; the engine only requires lookup by identifier.
//!
//! Two implementations ship here: [`MemoryDirectory`] for embedding
//! callers and tests, and [`JsonDirectory`] backed by a flat JSON file
//! for the CLI.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity resolution error
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Directory backend error: {0}")]
    Backend(String),
}

/// Resolved user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProfile {
    /// Contact email
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Contact phone, if the user provided one
    pub phone: Option<String>,
}

/// Lookup seam between the sealing engine and the user database
pub trait IdentityDirectory: Send + Sync {
    /// Resolve a user identifier to a profile
    fn lookup(&self, user_id: &str) -> Result<IdentityProfile, DirectoryError>;
}

/// In-memory directory for tests and embedding callers
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    users: HashMap<String, IdentityProfile>,
}

impl MemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user profile, replacing any existing entry
    pub fn insert(&mut self, user_id: impl Into<String>, profile: IdentityProfile) {
        self.users.insert(user_id.into(), profile);
    }
}

impl IdentityDirectory for MemoryDirectory {
    fn lookup(&self, user_id: &str) -> Result<IdentityProfile, DirectoryError> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))
    }
}

/// Directory backed by a flat JSON file mapping user id to profile:
///
/// ```json
/// {
///   "u1": { "email": "fay@example.com", "full_name": "Fay Finder", "phone": "555-0100" },
///   "u2": { "email": "lou@example.com", "full_name": "Lou Loser", "phone": null }
/// }
/// ```
#[derive(Debug)]
pub struct JsonDirectory {
    users: HashMap<String, IdentityProfile>,
}

impl JsonDirectory {
    /// Load the directory from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let bytes = std::fs::read(path.as_ref()).map_err(|e| {
            DirectoryError::Backend(format!("{}: {}", path.as_ref().display(), e))
        })?;
        let users = serde_json::from_slice(&bytes).map_err(|e| {
            DirectoryError::Backend(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Ok(Self { users })
    }

    /// Number of known users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl IdentityDirectory for JsonDirectory {
    fn lookup(&self, user_id: &str) -> Result<IdentityProfile, DirectoryError> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))
    }
}
