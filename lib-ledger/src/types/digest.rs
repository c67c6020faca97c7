//! Digest type and SHA-256 utilities
//!
//! A [`Digest`] is the SHA-256 output that links the chain together.
//! On the wire (canonical preimage, JSON output, CLI display) a digest
//! is always 64 lowercase hexadecimal characters; in memory it is a
//! fixed 32-byte array. The all-zero digest doubles as the genesis
//! sentinel: the first record of the chain carries it as its
//! `previous_digest`.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};

/// Length of a digest in hexadecimal characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// SHA-256 digest, rendered as lowercase hex on every external surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    /// All-zero digest; the genesis sentinel for `previous_digest`.
    pub const ZERO: Digest = Digest([0u8; 32]);

    /// Create a digest from raw bytes
    pub fn new(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    /// Compute the SHA-256 digest of arbitrary bytes
    pub fn sha256(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Digest(hasher.finalize().into())
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hexadecimal form (64 characters)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a digest from its 64-character hexadecimal form
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Digest(bytes))
    }

    /// Check whether this is the genesis sentinel
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Number of leading zero hexadecimal characters (nibbles)
    pub fn leading_zero_hex(&self) -> u32 {
        let mut count = 0;
        for byte in self.0 {
            if byte == 0 {
                count += 2;
                continue;
            }
            if byte >> 4 == 0 {
                count += 1;
            }
            break;
        }
        count
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Serialized as a hex string so the canonical preimage and any JSON
// surface carry the same 64-character form as the stored digest column.
impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(de::Error::custom)
    }
}
