//! High-score persistence.
//!
//! - `KeyValueStore`: the host's string store (`MemoryStore` for tests)
//! - `Scope`: global or per-family partition of the scores
//! - `Leaderboard` / `LeaderboardStore`: top-N lists sorted by turns
//! - `LegacyRecord`: the older single best-turns value
//!
//! Persisted format per scope is a JSON array of
//! `{"initials": "ABC", "turns": 12, "date": "2024-05-01"}`, ascending by
//! turns, at most `leaderboard_capacity` long.

mod board;
mod entry;
mod legacy;
mod storage;

pub use board::{Confirmation, Leaderboard, LeaderboardStore};
pub use entry::{normalize_initials, Scope, ScoreEntry};
pub use legacy::LegacyRecord;
pub use storage::{KeyValueStore, MemoryStore};
