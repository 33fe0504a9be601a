//! Session events and observers.
//!
//! Every state change the controller makes is described by a
//! `SessionEvent`. Renderers either read the events returned from each call
//! or subscribe a `SessionObserver` and redraw as they arrive.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;
use crate::leaderboard::{Scope, ScoreEntry};
use crate::session::Generation;

/// Something that happened in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new deck was dealt.
    GameStarted {
        generation: Generation,
        scope: Scope,
        cards: usize,
    },

    /// A card turned face-up.
    CardRevealed { card: CardIndex },

    /// Two face-up cards matched.
    PairMatched {
        identifier: String,
        /// Display name derived from the identifier.
        name: String,
        cards: [CardIndex; 2],
        /// Pairs matched so far.
        matched: usize,
    },

    /// Two face-up cards differ; they will be hidden after `hide_after`.
    PairMismatched {
        cards: [CardIndex; 2],
        hide_after: Duration,
    },

    /// A mismatched pair turned back face-down.
    CardsHidden { cards: [CardIndex; 2] },

    /// Every pair is matched.
    Victory { turns: u32 },

    /// The score made the leaderboard; initials are needed.
    InitialsRequested { turns: u32 },

    /// A score was written to the leaderboard.
    ScoreRecorded {
        entry: ScoreEntry,
        rank: Option<usize>,
    },

    /// Final result, with the best score for the scope afterwards.
    GameFinished { turns: u32, best: Option<u32> },

    /// A scope's leaderboard was erased.
    LeaderboardCleared { scope: Scope },
}

impl SessionEvent {
    /// Does this event end a game?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionEvent::GameFinished { .. })
    }
}

/// Receives session events as they happen.
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent),
{
    fn on_event(&mut self, event: &SessionEvent) {
        self(event);
    }
}
