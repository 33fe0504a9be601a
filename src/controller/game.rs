//! Session controller: one object driving a whole match game.
//!
//! ## Flow
//!
//! `Selecting -> Playing -> Resolving -> Playing -> ... -> Victory`
//!
//! Victory resolves to either `AwaitingInitials` (the score qualifies for
//! the leaderboard) or straight to `Finished`. Submitting initials records
//! the score and finishes. A new game can start from any phase.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::event::{SessionEvent, SessionObserver};
use super::view::SessionView;
use crate::cards::{build_deck, display_name, CardIndex};
use crate::core::{GameRng, MatchConfig, Result};
use crate::leaderboard::{Confirmation, KeyValueStore, Leaderboard, LeaderboardStore, Scope};
use crate::session::{DeferredQueue, DeferredRevert, FlipOutcome, GameSession, Generation};

/// Where the controller is in the game flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No game dealt yet (e.g. a family has to be chosen).
    Selecting,
    /// Accepting flips.
    Playing,
    /// A mismatch is on display; flips are ignored.
    Resolving,
    /// Won with a qualifying score; waiting for `submit_score`.
    AwaitingInitials { turns: u32 },
    /// Game over.
    Finished { turns: u32 },
}

/// Drives games, the mismatch delay, and the leaderboard.
pub struct SessionController<S> {
    scores: LeaderboardStore<S>,
    rng: GameRng,
    phase: Phase,
    scope: Scope,
    identifiers: Vec<String>,
    session: Option<GameSession>,
    generation: Generation,
    queue: DeferredQueue,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl<S: KeyValueStore> SessionController<S> {
    /// Create a controller over a score store.
    pub fn new(store: S, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(store, config))
    }

    /// Create a controller with the default configuration.
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self::build(store, MatchConfig::default())
    }

    fn build(store: S, config: MatchConfig) -> Self {
        Self {
            rng: GameRng::from_seed_option(config.seed),
            scores: LeaderboardStore::new(store, config),
            phase: Phase::Selecting,
            scope: Scope::Global,
            identifiers: Vec::new(),
            session: None,
            generation: Generation::default(),
            queue: DeferredQueue::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer for every future event.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        self.scores.config()
    }

    /// The game in progress, if one has been dealt.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn scores(&self) -> &LeaderboardStore<S> {
        &self.scores
    }

    pub fn scores_mut(&mut self) -> &mut LeaderboardStore<S> {
        &mut self.scores
    }

    /// Reverts waiting on the virtual clock.
    #[must_use]
    pub fn pending_reverts(&self) -> usize {
        self.queue.len()
    }

    /// Time until the next pending revert falls due.
    #[must_use]
    pub fn time_until_next_revert(&self) -> Option<Duration> {
        self.queue.time_until_next()
    }

    /// Current leaderboard for the active scope.
    #[must_use]
    pub fn leaderboard(&self) -> Leaderboard {
        self.scores.load(&self.scope)
    }

    #[must_use]
    pub fn best(&self) -> Option<u32> {
        self.scores.best(&self.scope)
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let board = self.leaderboard();
        let (cards, turns, matched_names, locked) = match &self.session {
            Some(s) => (
                s.cards().clone(),
                s.turns(),
                s.matched()
                    .iter()
                    .map(|id| display_name(id).to_string())
                    .collect::<Vec<_>>(),
                s.is_locked(),
            ),
            None => Default::default(),
        };

        SessionView {
            phase: self.phase,
            scope: self.scope.clone(),
            cards,
            turns,
            matched_names,
            locked,
            best: board.best(),
            leaderboard: board.entries().to_vec(),
        }
    }

    // === Game lifecycle ===

    /// Deal a new game for `scope` from a list of unique identifiers.
    ///
    /// Any pending revert from the previous game is cancelled and can no
    /// longer touch the new one. On error the current game is left as is.
    pub fn new_game<T: AsRef<str>>(&mut self, identifiers: &[T], scope: Scope) -> Result<Vec<SessionEvent>> {
        let deck = build_deck(identifiers, &mut self.rng)?;

        let cancelled = self.queue.cancel_all();
        self.generation = self.generation.next();
        self.identifiers = identifiers.iter().map(|id| id.as_ref().to_string()).collect();
        self.scope = scope;

        let cards = deck.len();
        let session = GameSession::new(deck, self.generation, self.config().reveal_delay());
        let won = session.is_victory();
        self.session = Some(session);
        self.phase = Phase::Playing;

        info!(
            generation = %self.generation,
            scope = %self.scope,
            pairs = self.identifiers.len(),
            cancelled,
            "new game"
        );

        let mut events = vec![SessionEvent::GameStarted {
            generation: self.generation,
            scope: self.scope.clone(),
            cards,
        }];
        if won {
            self.on_victory(&mut events);
        }

        self.notify(&events);
        Ok(events)
    }

    /// Reshuffle and restart with the same identifiers and scope.
    pub fn reset_game(&mut self) -> Result<Vec<SessionEvent>> {
        let identifiers = std::mem::take(&mut self.identifiers);
        let scope = self.scope.clone();
        let result = self.new_game(&identifiers, scope);
        if result.is_err() {
            self.identifiers = identifiers;
        }
        result
    }

    /// Abandon the current game and go back to choosing.
    pub fn return_to_selection(&mut self) {
        self.queue.cancel_all();
        self.generation = self.generation.next();
        self.session = None;
        self.phase = Phase::Selecting;
        debug!(generation = %self.generation, "back to selection");
    }

    // === Play ===

    /// Flip a card. Ignored flips return no events.
    pub fn flip(&mut self, card: CardIndex) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if !matches!(self.phase, Phase::Playing | Phase::Resolving) {
            debug!(card = %card, phase = ?self.phase, "flip ignored: not playing");
            return events;
        }
        let Some(session) = self.session.as_mut() else {
            return events;
        };

        match session.flip(card) {
            FlipOutcome::Ignored(_) => {}
            FlipOutcome::Revealed(index) => {
                events.push(SessionEvent::CardRevealed { card: index });
            }
            FlipOutcome::Matched { identifier, cards, victory } => {
                let matched = session.matched().len();
                events.push(SessionEvent::CardRevealed { card });
                events.push(SessionEvent::PairMatched {
                    name: display_name(&identifier).to_string(),
                    identifier,
                    cards,
                    matched,
                });
                if victory {
                    self.on_victory(&mut events);
                }
            }
            FlipOutcome::Mismatched(revert) => {
                events.push(SessionEvent::CardRevealed { card });
                events.push(SessionEvent::PairMismatched {
                    cards: revert.cards,
                    hide_after: revert.delay,
                });
                self.queue.schedule(revert);
                self.phase = Phase::Resolving;
            }
        }

        self.notify(&events);
        events
    }

    /// Advance the virtual clock and apply any reverts that fell due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        for revert in self.queue.advance(elapsed) {
            self.revert_into(&revert, &mut events);
        }
        self.notify(&events);
        events
    }

    /// Apply a revert fired by an external timer.
    ///
    /// Reverts from an earlier game, or already applied, do nothing.
    pub fn apply_revert(&mut self, revert: &DeferredRevert) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.revert_into(revert, &mut events);
        self.notify(&events);
        events
    }

    fn revert_into(&mut self, revert: &DeferredRevert, events: &mut Vec<SessionEvent>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.apply_revert(revert) {
            if self.phase == Phase::Resolving {
                self.phase = Phase::Playing;
            }
            events.push(SessionEvent::CardsHidden { cards: revert.cards });
        }
    }

    // === Victory and scores ===

    fn on_victory(&mut self, events: &mut Vec<SessionEvent>) {
        let turns = self.session.as_ref().map_or(0, GameSession::turns);
        events.push(SessionEvent::Victory { turns });
        info!(turns, scope = %self.scope, "victory");

        // Zero-turn wins (empty decks) never reach the leaderboard.
        if turns > 0 && self.scores.qualifies(&self.scope, turns) {
            self.phase = Phase::AwaitingInitials { turns };
            events.push(SessionEvent::InitialsRequested { turns });
        } else {
            self.phase = Phase::Finished { turns };
            events.push(SessionEvent::GameFinished {
                turns,
                best: self.best(),
            });
        }
    }

    /// Record the winning score under today's date.
    pub fn submit_score(&mut self, initials: &str) -> Result<Vec<SessionEvent>> {
        self.submit_score_on(initials, chrono::Local::now().date_naive())
    }

    /// Record the winning score under a given date.
    ///
    /// Does nothing unless the controller is waiting for initials.
    pub fn submit_score_on(&mut self, initials: &str, date: NaiveDate) -> Result<Vec<SessionEvent>> {
        let Phase::AwaitingInitials { turns } = self.phase else {
            debug!(phase = ?self.phase, "score submission ignored");
            return Ok(Vec::new());
        };

        let date = date.format("%Y-%m-%d").to_string();
        let (entry, rank, board) = self.scores.insert(&self.scope, initials, turns, &date)?;
        self.phase = Phase::Finished { turns };

        let events = vec![
            SessionEvent::ScoreRecorded { entry, rank },
            SessionEvent::GameFinished {
                turns,
                best: board.best(),
            },
        ];
        self.notify(&events);
        Ok(events)
    }

    /// Erase the current scope's leaderboard.
    ///
    /// The caller decides how to ask; only `Confirmation::Confirmed`
    /// clears anything.
    pub fn reset_record(&mut self, confirmation: Confirmation) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.scores.clear(&self.scope, confirmation) {
            events.push(SessionEvent::LeaderboardCleared {
                scope: self.scope.clone(),
            });
        }
        self.notify(&events);
        events
    }

    fn notify(&mut self, events: &[SessionEvent]) {
        for event in events {
            for observer in &mut self.observers {
                observer.on_event(event);
            }
        }
    }
}
