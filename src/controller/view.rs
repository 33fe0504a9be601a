//! Render snapshot.

use im::Vector;

use super::game::Phase;
use crate::cards::Card;
use crate::leaderboard::{Scope, ScoreEntry};

/// Everything a renderer needs to draw the table and score panel.
///
/// Cheap to take: the card list shares structure with the live session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub phase: Phase,
    pub scope: Scope,
    pub cards: Vector<Card>,
    pub turns: u32,
    /// Display names of matched people, in match order.
    pub matched_names: Vec<String>,
    pub locked: bool,
    /// Best turns on the current scope's leaderboard.
    pub best: Option<u32>,
    pub leaderboard: Vec<ScoreEntry>,
}

impl SessionView {
    /// Victory with a qualifying score waiting for initials.
    #[must_use]
    pub fn needs_initials(&self) -> bool {
        matches!(self.phase, Phase::AwaitingInitials { .. })
    }
}
