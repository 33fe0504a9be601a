//! Deck building.
//!
//! `build_deck` doubles a list of unique identifiers into pairs and deals
//! them in a uniformly random order. An empty list is legal and yields an
//! empty deck.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::card::{Card, CardIndex};
use crate::core::{GameRng, MatchError, Result};

/// A dealt deck: every identifier appears exactly twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
    distinct: usize,
}

impl Deck {
    /// Number of distinct identifiers (pairs) in the deck.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.distinct
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.raw())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Identifiers in deal order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.identifier.as_str())
    }

    /// Consume the deck into its card sequence.
    #[must_use]
    pub fn into_cards(self) -> Vector<Card> {
        self.cards
    }
}

/// Build a shuffled deck of pairs.
///
/// Returns `DuplicateIdentifier` if any identifier is repeated, since that
/// would deal four cards of one person.
pub fn build_deck<S: AsRef<str>>(identifiers: &[S], rng: &mut GameRng) -> Result<Deck> {
    let mut seen = FxHashSet::default();
    for id in identifiers {
        if !seen.insert(id.as_ref()) {
            return Err(MatchError::DuplicateIdentifier {
                identifier: id.as_ref().to_string(),
            });
        }
    }

    let mut doubled: Vec<&str> = identifiers
        .iter()
        .chain(identifiers.iter())
        .map(|id| id.as_ref())
        .collect();
    rng.shuffle(&mut doubled);

    let cards: Vector<Card> = doubled
        .into_iter()
        .enumerate()
        .map(|(i, id)| Card::new(CardIndex::new(i), id))
        .collect();

    debug!(pairs = identifiers.len(), seed = rng.seed(), "dealt deck");

    Ok(Deck {
        cards,
        distinct: identifiers.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardStatus;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_every_identifier_twice() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&["Alice", "Bob", "Carol"], &mut rng).unwrap();

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.distinct(), 3);

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for id in deck.identifiers() {
            *counts.entry(id).or_default() += 1;
        }
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_sequential_indices_face_down() {
        let mut rng = GameRng::new(1);
        let deck = build_deck(&["A", "B", "C", "D"], &mut rng).unwrap();

        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.index, CardIndex::new(i));
            assert_eq!(card.status, CardStatus::FaceDown);
        }
    }

    #[test]
    fn test_empty_deck() {
        let mut rng = GameRng::new(42);
        let empty: [&str; 0] = [];
        let deck = build_deck(&empty, &mut rng).unwrap();

        assert!(deck.is_empty());
        assert_eq!(deck.distinct(), 0);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut rng = GameRng::new(42);
        let err = build_deck(&["Alice", "Bob", "Alice"], &mut rng).unwrap_err();

        match err {
            MatchError::DuplicateIdentifier { identifier } => assert_eq!(identifier, "Alice"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let ids = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let a = build_deck(&ids, &mut GameRng::new(9)).unwrap();
        let b = build_deck(&ids, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_get_out_of_range() {
        let deck = build_deck(&["A"], &mut GameRng::new(0)).unwrap();
        assert!(deck.get(CardIndex::new(1)).is_some());
        assert!(deck.get(CardIndex::new(2)).is_none());
    }
}
