//! Game state machine.
//!
//! Cards move `FaceDown -> FaceUp -> (Matched | FaceDown)`. The session
//! counts turns, tracks matched pairs, and holds the input lock while a
//! mismatch is on display. The mismatch delay itself is a `DeferredRevert`
//! scheduled on a `DeferredQueue`, guarded by the session `Generation` so
//! a revert from a finished game can never touch a new one.

mod deferred;
mod state;

pub use deferred::{DeferredQueue, DeferredRevert, Generation};
pub use state::{FlipOutcome, GameSession, IgnoredFlip};
