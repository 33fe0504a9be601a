//! # family-match
//!
//! Engine for a memory-matching card game used to learn family members'
//! names from photographs.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: a `GameSession` owns one game; a
//!    `SessionController` owns the session, the leaderboard store, and the
//!    pending mismatch reverts.
//!
//! 2. **Events out, calls in**: renderers call `flip`, `new_game`,
//!    `submit_score`, `reset_record` and redraw from the returned
//!    `SessionEvent`s or a `SessionView` snapshot.
//!
//! 3. **Storage-agnostic scores**: leaderboards persist through any
//!    `KeyValueStore`; `MemoryStore` ships for tests.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: cards, decks, deck building
//! - `session`: flip/match/mismatch state machine and deferred reverts
//! - `leaderboard`: scoped top-N score lists and the legacy single record
//! - `controller`: game flow, victory handling, observers
//!
//! ## Example
//!
//! ```
//! use family_match::{MatchConfig, MemoryStore, Phase, Scope, SessionController};
//!
//! let config = MatchConfig::default().with_seed(7);
//! let mut game = SessionController::new(MemoryStore::new(), config).unwrap();
//!
//! game.new_game(&["Alice", "Bob"], Scope::Global).unwrap();
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.view().cards.len(), 4);
//! ```

pub mod core;
pub mod cards;
pub mod session;
pub mod leaderboard;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{GameRng, MatchConfig, MatchError, Result};

pub use crate::cards::{build_deck, display_name, Card, CardIndex, CardStatus, Deck};

pub use crate::session::{DeferredQueue, DeferredRevert, FlipOutcome, GameSession, Generation, IgnoredFlip};

pub use crate::leaderboard::{
    normalize_initials, Confirmation, KeyValueStore, Leaderboard, LeaderboardStore,
    LegacyRecord, MemoryStore, Scope, ScoreEntry,
};

pub use crate::controller::{Phase, SessionController, SessionEvent, SessionObserver, SessionView};
