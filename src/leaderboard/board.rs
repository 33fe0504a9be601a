//! Scoped top-N leaderboards.
//!
//! `Leaderboard` is the in-memory list for one scope, always sorted
//! ascending by turns and never longer than its capacity.
//! `LeaderboardStore` wraps a `KeyValueStore` and performs each operation
//! as a fresh read-modify-write against the persisted value, so nothing is
//! cached between calls.

use tracing::{info, warn};

use super::entry::{normalize_initials, Scope, ScoreEntry};
use super::legacy::LegacyRecord;
use super::storage::KeyValueStore;
use crate::core::{MatchConfig, Result};

/// Caller's answer to "really clear the leaderboard?".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Sorted, bounded list of scores for one scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    scope: Scope,
    entries: Vec<ScoreEntry>,
    capacity: usize,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    #[must_use]
    pub fn new(scope: Scope, capacity: usize) -> Self {
        Self {
            scope,
            entries: Vec::new(),
            capacity,
        }
    }

    /// Build from arbitrary entries, restoring order and size limits.
    #[must_use]
    pub fn from_entries(scope: Scope, mut entries: Vec<ScoreEntry>, capacity: usize) -> Self {
        entries.sort_by_key(|e| e.turns);
        entries.truncate(capacity);
        Self {
            scope,
            entries,
            capacity,
        }
    }

    /// Decode a persisted JSON value. Malformed data yields an empty board.
    #[must_use]
    pub fn decode(scope: Scope, raw: &str, capacity: usize) -> Self {
        match serde_json::from_str::<Vec<ScoreEntry>>(raw) {
            Ok(entries) => Self::from_entries(scope, entries, capacity),
            Err(err) => {
                warn!(scope = %scope, error = %err, "corrupt leaderboard data, treating as empty");
                Self::new(scope, capacity)
            }
        }
    }

    /// Encode for persistence.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Would a score of `turns` earn a place on the board?
    ///
    /// Always true while the board has room; otherwise `turns` must beat
    /// the last entry outright.
    #[must_use]
    pub fn qualifies(&self, turns: u32) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        self.entries.last().map_or(true, |last| turns < last.turns)
    }

    /// Lowest turn count on the board.
    #[must_use]
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.turns)
    }

    /// Insert an entry, keeping ties in insertion order.
    ///
    /// Returns the entry's 0-based rank, or `None` if it fell off the end.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        let rank = self.entries.partition_point(|e| e.turns <= entry.turns);
        self.entries.insert(rank, entry);
        self.entries.truncate(self.capacity);
        (rank < self.capacity).then_some(rank)
    }
}

/// Leaderboard operations over a key-value store.
#[derive(Clone, Debug)]
pub struct LeaderboardStore<S> {
    store: S,
    config: MatchConfig,
}

impl<S: KeyValueStore> LeaderboardStore<S> {
    #[must_use]
    pub fn new(store: S, config: MatchConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn key(&self, scope: &Scope) -> String {
        scope.storage_key(&self.config.storage_key)
    }

    /// Read the current leaderboard for a scope.
    #[must_use]
    pub fn load(&self, scope: &Scope) -> Leaderboard {
        let capacity = self.config.leaderboard_capacity;
        match self.store.get(&self.key(scope)) {
            Some(raw) => Leaderboard::decode(scope.clone(), &raw, capacity),
            None => Leaderboard::new(scope.clone(), capacity),
        }
    }

    #[must_use]
    pub fn qualifies(&self, scope: &Scope, turns: u32) -> bool {
        self.load(scope).qualifies(turns)
    }

    #[must_use]
    pub fn best(&self, scope: &Scope) -> Option<u32> {
        self.load(scope).best()
    }

    /// Record a score. Initials are normalized first.
    ///
    /// Returns the stored entry, its rank (if it made the cut), and the
    /// updated board.
    pub fn insert(
        &mut self,
        scope: &Scope,
        initials: &str,
        turns: u32,
        date: &str,
    ) -> Result<(ScoreEntry, Option<usize>, Leaderboard)> {
        let entry = ScoreEntry::new(normalize_initials(initials, &self.config), turns, date);

        let mut board = self.load(scope);
        let rank = board.insert(entry.clone());
        self.store.set(&self.key(scope), board.encode()?);

        info!(scope = %scope, initials = %entry.initials, turns, rank = ?rank, "score recorded");
        Ok((entry, rank, board))
    }

    /// Delete a scope's leaderboard, but only when confirmed.
    ///
    /// Returns whether anything was cleared.
    pub fn clear(&mut self, scope: &Scope, confirmation: Confirmation) -> bool {
        if confirmation != Confirmation::Confirmed {
            return false;
        }
        self.store.remove(&self.key(scope));
        info!(scope = %scope, "leaderboard cleared");
        true
    }

    /// Legacy single best-turns record.
    #[must_use]
    pub fn legacy(&self) -> LegacyRecord {
        LegacyRecord::load(&self.store, &self.config)
    }

    /// Import a legacy best-turns value into an empty scoped board.
    ///
    /// The legacy key is removed once imported. Returns whether an entry
    /// was imported.
    pub fn migrate_legacy(&mut self, scope: &Scope, date: &str) -> Result<bool> {
        let Some(best) = self.legacy().best() else {
            return Ok(false);
        };
        if !self.load(scope).is_empty() {
            return Ok(false);
        }

        let initials = self.config.default_initials.clone();
        self.insert(scope, &initials, best, date)?;
        self.store.remove(&self.config.legacy_key);
        info!(scope = %scope, turns = best, "migrated legacy record");
        Ok(true)
    }
}
