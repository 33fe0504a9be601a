//! Score entries, scopes, and initials normalization.

use serde::{Deserialize, Serialize};

use crate::core::MatchConfig;

/// Leaderboard partition.
///
/// One global board, or one board per family when players pick which
/// family to practice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[default]
    Global,
    Family(String),
}

impl Scope {
    /// Convenience constructor for a family scope.
    pub fn family(name: impl Into<String>) -> Self {
        Scope::Family(name.into())
    }

    /// Storage key for this scope: `base` or `base:<family>`.
    #[must_use]
    pub fn storage_key(&self, base: &str) -> String {
        match self {
            Scope::Global => base.to_string(),
            Scope::Family(name) => format!("{}:{}", base, name),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Family(name) => write!(f, "family:{}", name),
        }
    }
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Normalized initials (see `normalize_initials`).
    pub initials: String,

    /// Turns taken to clear the board.
    pub turns: u32,

    /// Date the game was won.
    pub date: String,
}

impl ScoreEntry {
    #[must_use]
    pub fn new(initials: impl Into<String>, turns: u32, date: impl Into<String>) -> Self {
        Self {
            initials: initials.into(),
            turns,
            date: date.into(),
        }
    }
}

/// Normalize player initials for storage.
///
/// Uppercases, substitutes the default when blank, pads with the pad
/// character and truncates to exactly `initials_len` characters.
#[must_use]
pub fn normalize_initials(raw: &str, config: &MatchConfig) -> String {
    let trimmed = raw.trim();
    let source = if trimmed.is_empty() {
        config.default_initials.as_str()
    } else {
        trimmed
    };

    let mut out: String = source
        .to_uppercase()
        .chars()
        .take(config.initials_len)
        .collect();
    let missing = config.initials_len.saturating_sub(out.chars().count());
    out.extend(std::iter::repeat(config.initials_pad).take(missing));
    out
}
