//! Legacy single-record mode.
//!
//! Older installs kept one integer, the best turn count ever, with no
//! initials or date. A missing record counts as `legacy_default_record`
//! turns, so any reasonable first win sets a record.

use tracing::{info, warn};

use super::storage::KeyValueStore;
use crate::core::MatchConfig;

/// The legacy best-turns value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyRecord {
    key: String,
    default_record: u32,
    best: Option<u32>,
}

impl LegacyRecord {
    /// Read the record. Absent or unparsable values load as `None`.
    #[must_use]
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, config: &MatchConfig) -> Self {
        let best = store.get(&config.legacy_key).and_then(|raw| {
            let parsed = raw.trim().parse::<u32>().ok().filter(|&t| t > 0);
            if parsed.is_none() {
                warn!(key = %config.legacy_key, "unreadable legacy record, ignoring");
            }
            parsed
        });

        Self {
            key: config.legacy_key.clone(),
            default_record: config.legacy_default_record,
            best,
        }
    }

    /// Stored best, if any.
    #[must_use]
    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// The number to beat.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.best.unwrap_or(self.default_record)
    }

    #[must_use]
    pub fn is_new_record(&self, turns: u32) -> bool {
        turns < self.threshold()
    }

    /// Store `turns` if it beats the record. Returns whether it did.
    pub fn record<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, turns: u32) -> bool {
        if !self.is_new_record(turns) {
            return false;
        }
        store.set(&self.key, turns.to_string());
        self.best = Some(turns);
        info!(turns, "new legacy record");
        true
    }

    /// Forget the record.
    pub fn reset<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        store.remove(&self.key);
        self.best = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::MemoryStore;

    #[test]
    fn test_missing_record_uses_default() {
        let store = MemoryStore::new();
        let record = LegacyRecord::load(&store, &MatchConfig::default());

        assert_eq!(record.best(), None);
        assert_eq!(record.threshold(), 100);
        assert!(record.is_new_record(99));
        assert!(!record.is_new_record(100));
    }

    #[test]
    fn test_record_and_reload() {
        let mut store = MemoryStore::new();
        let config = MatchConfig::default();
        let mut record = LegacyRecord::load(&store, &config);

        assert!(record.record(&mut store, 20));
        assert!(!record.record(&mut store, 20));
        assert!(!record.record(&mut store, 25));
        assert!(record.record(&mut store, 15));

        let reloaded = LegacyRecord::load(&store, &config);
        assert_eq!(reloaded.best(), Some(15));
        assert_eq!(store.get("record"), Some("15".to_string()));
    }

    #[test]
    fn test_unparsable_record() {
        let store = MemoryStore::new().with_value("record", "lots");
        let record = LegacyRecord::load(&store, &MatchConfig::default());
        assert_eq!(record.best(), None);
    }

    #[test]
    fn test_reset() {
        let mut store = MemoryStore::new().with_value("record", "12");
        let mut record = LegacyRecord::load(&store, &MatchConfig::default());
        assert_eq!(record.best(), Some(12));

        record.reset(&mut store);
        assert_eq!(record.best(), None);
        assert!(!store.contains("record"));
    }
}
