//! Leaderboard persistence tests.
//!
//! These tests exercise the store-backed leaderboard through the public
//! API: qualification, insertion order, persisted format, corrupt data,
//! and the legacy single-record value.

use family_match::{
    Confirmation, KeyValueStore, LeaderboardStore, LegacyRecord, MatchConfig, MemoryStore, Scope,
    ScoreEntry,
};

fn scores() -> LeaderboardStore<MemoryStore> {
    LeaderboardStore::new(MemoryStore::new(), MatchConfig::default())
}

/// Empty board, insert 25 turns, best is 25.
#[test]
fn test_first_score() {
    let mut scores = scores();
    let scope = Scope::Global;

    scores.insert(&scope, "abc", 25, "2024-02-02").unwrap();

    let board = scores.load(&scope);
    assert_eq!(board.entries(), &[ScoreEntry::new("ABC", 25, "2024-02-02")]);
    assert_eq!(scores.best(&scope), Some(25));
}

/// Ten entries 10..19: 9 qualifies, 20 does not.
#[test]
fn test_full_board_qualification() {
    let mut scores = scores();
    let scope = Scope::family("Bodily");

    for turns in 10..20 {
        scores.insert(&scope, "xyz", turns, "d").unwrap();
    }

    assert_eq!(scores.load(&scope).len(), 10);
    assert!(scores.qualifies(&scope, 9));
    assert!(!scores.qualifies(&scope, 20));
}

/// Fewer than ten entries: any score qualifies.
#[test]
fn test_room_means_qualify() {
    let mut scores = scores();
    let scope = Scope::Global;

    for turns in [3, 1, 2] {
        scores.insert(&scope, "", turns, "d").unwrap();
    }

    assert!(scores.qualifies(&scope, 0));
    assert!(scores.qualifies(&scope, u32::MAX));
}

/// Out-of-order inserts persist sorted and capped.
#[test]
fn test_sorted_and_capped() {
    let mut scores = scores();
    let scope = Scope::Global;

    for turns in [30, 12, 50, 12, 8, 41, 19, 27, 33, 60, 15, 22] {
        scores.insert(&scope, "p", turns, "d").unwrap();
    }

    let turns: Vec<u32> = scores.load(&scope).entries().iter().map(|e| e.turns).collect();
    assert_eq!(turns, vec![8, 12, 12, 15, 19, 22, 27, 30, 33, 41]);
}

/// The persisted value is a JSON array of entries under the scoped key.
#[test]
fn test_persisted_format() {
    let mut scores = scores();
    scores.insert(&Scope::family("Barlow"), "vb", 14, "2023-11-30").unwrap();

    let raw = scores.store().get("highScores:Barlow").expect("value written");
    assert_eq!(raw, r#"[{"initials":"VB-","turns":14,"date":"2023-11-30"}]"#);
}

/// Corrupt data reads as an empty board and never errors.
#[test]
fn test_corrupt_data_is_empty() {
    let store = MemoryStore::new().with_value("highScores", "[{oops");
    let scores = LeaderboardStore::new(store, MatchConfig::default());

    assert!(scores.load(&Scope::Global).is_empty());
    assert_eq!(scores.best(&Scope::Global), None);
    assert!(scores.qualifies(&Scope::Global, 99));
}

/// Clearing only happens with explicit confirmation, and only for one scope.
#[test]
fn test_clear_scope() {
    let mut scores = scores();
    let bodily = Scope::family("Bodily");
    scores.insert(&bodily, "a", 5, "d").unwrap();
    scores.insert(&Scope::Global, "b", 6, "d").unwrap();

    assert!(!scores.clear(&bodily, Confirmation::Declined));
    assert_eq!(scores.best(&bodily), Some(5));

    assert!(scores.clear(&bodily, Confirmation::Confirmed));
    assert_eq!(scores.best(&bodily), None);
    assert_eq!(scores.best(&Scope::Global), Some(6));
}

/// Legacy integer records load, compare and migrate.
#[test]
fn test_legacy_record_flow() {
    let store = MemoryStore::new().with_value("record", "18");
    let mut scores = LeaderboardStore::new(store, MatchConfig::default());

    let legacy = scores.legacy();
    assert_eq!(legacy.best(), Some(18));
    assert!(legacy.is_new_record(17));
    assert!(!legacy.is_new_record(18));

    assert!(scores.migrate_legacy(&Scope::Global, "2019-07-04").unwrap());
    assert_eq!(scores.best(&Scope::Global), Some(18));
    assert_eq!(scores.legacy().best(), None);
}

/// Legacy mode on its own: set only when beaten, reset clears.
#[test]
fn test_legacy_only_mode() {
    let config = MatchConfig::default();
    let mut store = MemoryStore::new();
    let mut record = LegacyRecord::load(&store, &config);

    assert!(record.record(&mut store, 40));
    assert!(!record.record(&mut store, 41));
    assert_eq!(LegacyRecord::load(&store, &config).best(), Some(40));

    record.reset(&mut store);
    assert_eq!(LegacyRecord::load(&store, &config).best(), None);
}
