//! Game configuration.
//!
//! Everything tunable about a match game lives in `MatchConfig`: the
//! mismatch reveal delay, leaderboard size, initials format, storage keys,
//! and an optional fixed shuffle seed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};

/// Match game configuration.
///
/// Missing fields take their defaults when deserialized, so a config file
/// only has to name what it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// How long a mismatched pair stays face-up, in milliseconds.
    pub reveal_delay_ms: u64,

    /// Maximum entries kept per leaderboard.
    pub leaderboard_capacity: usize,

    /// Exact length of stored initials.
    pub initials_len: usize,

    /// Padding used when initials are too short.
    pub initials_pad: char,

    /// Substituted when no initials are entered.
    pub default_initials: String,

    /// Storage key of the global leaderboard. Family boards append `:<family>`.
    pub storage_key: String,

    /// Storage key of the legacy single best-turns value.
    pub legacy_key: String,

    /// Best-turns value assumed when no legacy record exists.
    pub legacy_default_record: u32,

    /// Fixed shuffle seed. `None` seeds each game from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1000,
            leaderboard_capacity: 10,
            initials_len: 3,
            initials_pad: '-',
            default_initials: "AAA".to_string(),
            storage_key: "highScores".to_string(),
            legacy_key: "record".to_string(),
            legacy_default_record: 100,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config's internal constraints.
    pub fn validate(&self) -> Result<()> {
        if self.leaderboard_capacity == 0 {
            return Err(MatchError::InvalidConfig {
                message: "leaderboard_capacity must be at least 1".to_string(),
            });
        }
        if self.initials_len == 0 {
            return Err(MatchError::InvalidConfig {
                message: "initials_len must be at least 1".to_string(),
            });
        }
        if self.storage_key.is_empty() {
            return Err(MatchError::InvalidConfig {
                message: "storage_key must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Mismatch reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the leaderboard capacity.
    #[must_use]
    pub fn with_leaderboard_capacity(mut self, capacity: usize) -> Self {
        self.leaderboard_capacity = capacity;
        self
    }

    /// Set the global storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Fix the shuffle seed for reproducible decks.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
