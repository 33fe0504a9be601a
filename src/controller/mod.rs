//! Session controller.
//!
//! Bridges the deck builder, the game session, and the leaderboard into a
//! single flow a renderer can drive:
//!
//! - `new_game` / `reset_game`: deal and start over
//! - `flip` and `advance` / `apply_revert`: play and let mismatches settle
//! - `submit_score`: record a qualifying win
//! - `reset_record`: clear a scope's leaderboard, with confirmation
//!
//! Every call returns the `SessionEvent`s it produced and forwards them to
//! subscribed `SessionObserver`s.

mod event;
mod game;
mod view;

pub use event::{SessionEvent, SessionObserver};
pub use game::{Phase, SessionController};
pub use view::SessionView;
