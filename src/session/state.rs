//! Game session: the flip/match/mismatch state machine.
//!
//! ## Rules
//!
//! - A flip is ignored while the session is locked, or when the card is
//!   not face-down. Ignored flips change nothing.
//! - A second face-up card completes a turn: the turn counter goes up by
//!   one and the pair is resolved.
//! - A match marks both cards `Matched` and releases the lock at once.
//! - A mismatch keeps both cards face-up and locked until the returned
//!   `DeferredRevert` is applied.
//!
//! A `GameSession` lives for exactly one game. Starting over replaces it
//! wholesale with a session of a newer `Generation`.

use std::time::Duration;

use im::Vector;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, warn};

use super::deferred::{DeferredRevert, Generation};
use crate::cards::{Card, CardIndex, CardStatus, Deck};

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoredFlip {
    /// A mismatch is still being shown.
    Locked,
    /// The card is already face-up or matched.
    NotFaceDown,
    /// No card at that index.
    OutOfRange,
}

/// Result of a single flip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Nothing happened.
    Ignored(IgnoredFlip),

    /// First card of a pair turned face-up.
    Revealed(CardIndex),

    /// The two face-up cards share an identifier.
    Matched {
        identifier: String,
        cards: [CardIndex; 2],
        /// Every pair is now matched.
        victory: bool,
    },

    /// The two face-up cards differ. The session stays locked until the
    /// revert is applied.
    Mismatched(DeferredRevert),
}

/// State of one game in progress.
#[derive(Clone, Debug)]
pub struct GameSession {
    cards: Vector<Card>,
    distinct: usize,
    face_up: SmallVec<[CardIndex; 2]>,
    matched: Vec<String>,
    matched_set: FxHashSet<String>,
    turns: u32,
    locked: bool,
    generation: Generation,
    reveal_delay: Duration,
}

impl GameSession {
    /// Start a session over a freshly dealt deck.
    #[must_use]
    pub fn new(deck: Deck, generation: Generation, reveal_delay: Duration) -> Self {
        let distinct = deck.distinct();
        Self {
            cards: deck.into_cards(),
            distinct,
            face_up: SmallVec::new(),
            matched: Vec::new(),
            matched_set: FxHashSet::default(),
            turns: 0,
            locked: false,
            generation,
            reveal_delay,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Completed two-card flips so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Cards currently face-up and not yet resolved (0, 1 or 2).
    #[must_use]
    pub fn face_up(&self) -> &[CardIndex] {
        &self.face_up
    }

    /// Matched identifiers in the order they were found.
    #[must_use]
    pub fn matched(&self) -> &[String] {
        &self.matched
    }

    /// Number of pairs in the game.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.distinct
    }

    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.raw())
    }

    /// All cards in deal order. Cloning this is O(1).
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Every pair has been matched. Vacuously true for an empty deck.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.matched.len() == self.distinct
    }

    // === Transitions ===

    /// Flip a card face-up.
    pub fn flip(&mut self, index: CardIndex) -> FlipOutcome {
        if self.locked {
            debug!(card = %index, "flip ignored: locked");
            return FlipOutcome::Ignored(IgnoredFlip::Locked);
        }

        let Some(card) = self.cards.get_mut(index.raw()) else {
            debug!(card = %index, "flip ignored: no such card");
            return FlipOutcome::Ignored(IgnoredFlip::OutOfRange);
        };
        if !card.is_face_down() {
            debug!(card = %index, status = ?card.status, "flip ignored: not face-down");
            return FlipOutcome::Ignored(IgnoredFlip::NotFaceDown);
        }

        card.status = CardStatus::FaceUp;
        self.face_up.push(index);
        debug!(card = %index, "card revealed");

        if self.face_up.len() < 2 {
            return FlipOutcome::Revealed(index);
        }

        self.turns += 1;
        self.locked = true;
        self.resolve_pair()
    }

    /// Decide match or mismatch for the two face-up cards.
    fn resolve_pair(&mut self) -> FlipOutcome {
        let pair = [self.face_up[0], self.face_up[1]];
        let first = self.cards[pair[0].raw()].identifier.clone();
        let second_matches = self.cards[pair[1].raw()].identifier == first;

        if !second_matches {
            debug!(first = %pair[0], second = %pair[1], turns = self.turns, "mismatch");
            return FlipOutcome::Mismatched(DeferredRevert {
                generation: self.generation,
                cards: pair,
                delay: self.reveal_delay,
            });
        }

        for idx in pair {
            self.cards[idx.raw()].status = CardStatus::Matched;
        }
        if self.matched_set.insert(first.clone()) {
            self.matched.push(first.clone());
        }
        self.face_up.clear();
        self.locked = false;

        let victory = self.is_victory();
        debug!(identifier = %first, matched = self.matched.len(), turns = self.turns, victory, "match");

        FlipOutcome::Matched {
            identifier: first,
            cards: pair,
            victory,
        }
    }

    /// Turn a mismatched pair back face-down and release the lock.
    ///
    /// Returns `false` without touching anything if the revert belongs to
    /// another generation or its cards are no longer the face-up pair.
    pub fn apply_revert(&mut self, revert: &DeferredRevert) -> bool {
        if revert.generation != self.generation {
            warn!(
                revert = %revert.generation,
                current = %self.generation,
                "stale revert ignored"
            );
            return false;
        }
        if self.face_up.as_slice() != revert.cards.as_slice() {
            debug!(cards = ?revert.cards, "revert ignored: pair no longer face-up");
            return false;
        }

        for idx in revert.cards {
            if let Some(card) = self.cards.get_mut(idx.raw()) {
                card.status = CardStatus::FaceDown;
            }
        }
        self.face_up.clear();
        self.locked = false;
        debug!(cards = ?revert.cards, "mismatched pair hidden");
        true
    }
}
