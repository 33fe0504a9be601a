//! Deferred mismatch reverts.
//!
//! A mismatched pair stays face-up for a short delay before it is turned
//! back over. That delay is the only suspension point in a game, so it is
//! modeled explicitly instead of as a fire-and-forget timer:
//!
//! - `Generation` tags every session. A new game always gets a new one.
//! - `DeferredRevert` is the scheduled action, stamped with the generation
//!   of the session that created it. Applying it to any other session is a
//!   no-op.
//! - `DeferredQueue` is a virtual clock holding pending reverts. Callers
//!   advance it by elapsed time and apply whatever fell due.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;

/// Monotonic session counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// "Turn these two cards back face-down and release the lock."
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredRevert {
    /// Session that scheduled the revert.
    pub generation: Generation,

    /// The mismatched pair.
    pub cards: [CardIndex; 2],

    /// How long after scheduling the revert should run.
    pub delay: Duration,
}

#[derive(Clone, Debug)]
struct Scheduled {
    due: Duration,
    action: DeferredRevert,
}

/// Pending reverts against a virtual clock.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue {
    now: Duration,
    pending: Vec<Scheduled>,
}

impl DeferredQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule an action `action.delay` from now.
    pub fn schedule(&mut self, action: DeferredRevert) {
        let due = self.now + action.delay;
        self.pending.push(Scheduled { due, action });
    }

    /// Time left until the earliest pending action, if any.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|s| s.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward and take every action that fell due.
    ///
    /// Returned in due order; ties keep scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<DeferredRevert> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = pending;

        due.sort_by_key(|s| s.due);
        due.into_iter().map(|s| s.action).collect()
    }

    /// Drop every pending action. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }
}
