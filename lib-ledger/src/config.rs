//! Sealing configuration
//!
//! Parameters controlling the proof-of-work search. Defaults match the
//! production ledger (difficulty 2, ceiling 10,000 attempts); both can
//! be overridden through the environment for operational tuning.

use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, DIGEST_HEX_LEN};

/// Required leading zero hex characters in a sealed digest
pub const DEFAULT_DIFFICULTY: u32 = 2;

/// Maximum nonces tried before accepting a degraded seal
pub const DEFAULT_ATTEMPT_CEILING: u64 = 10_000;

/// Environment variable overriding the sealing difficulty
pub const ENV_DIFFICULTY: &str = "RECLAIM_SEAL_DIFFICULTY";

/// Environment variable overriding the attempt ceiling
pub const ENV_ATTEMPT_CEILING: &str = "RECLAIM_SEAL_ATTEMPT_CEILING";

/// Configuration for the sealing search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SealConfig {
    /// Difficulty target each sealed digest should satisfy
    pub difficulty: Difficulty,

    /// Upper bound on nonces tried per seal. Hitting the ceiling yields
    /// a degraded record rather than an unbounded loop.
    pub attempt_ceiling: u64,
}

impl SealConfig {
    /// Create a config with explicit parameters
    pub fn new(difficulty: Difficulty, attempt_ceiling: u64) -> Self {
        Self {
            difficulty,
            attempt_ceiling,
        }
    }

    /// Build the config from the environment, falling back to defaults.
    ///
    /// Unparsable or invalid values are ignored with a warning rather
    /// than failing startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_DIFFICULTY) {
            match raw.parse::<u32>() {
                Ok(zeros) if zeros as usize <= DIGEST_HEX_LEN => {
                    config.difficulty = Difficulty::new(zeros);
                }
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid {ENV_DIFFICULTY}");
                }
            }
        }

        if let Ok(raw) = std::env::var(ENV_ATTEMPT_CEILING) {
            match raw.parse::<u64>() {
                Ok(ceiling) if ceiling > 0 => {
                    config.attempt_ceiling = ceiling;
                }
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid {ENV_ATTEMPT_CEILING}");
                }
            }
        }

        config
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.attempt_ceiling == 0 {
            return Err("attempt_ceiling must be greater than 0".to_string());
        }

        if self.difficulty.leading_zeros() as usize > DIGEST_HEX_LEN {
            return Err(format!(
                "difficulty cannot exceed {} leading zeros",
                DIGEST_HEX_LEN
            ));
        }

        Ok(())
    }
}

impl Default for SealConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::new(DEFAULT_DIFFICULTY),
            attempt_ceiling: DEFAULT_ATTEMPT_CEILING,
        }
    }
}
