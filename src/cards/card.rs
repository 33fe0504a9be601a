//! Cards - one face of a pair on the table.
//!
//! A `Card` pairs an identifier (a person's name or image key) with its
//! position in the deck and a volatile status. Exactly two cards in a deck
//! share each identifier.

use serde::{Deserialize, Serialize};

/// Position of a card within its deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub usize);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Card status.
///
/// Transitions: `FaceDown -> FaceUp -> (Matched | FaceDown)`.
/// `Matched` is terminal for the lifetime of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    #[default]
    FaceDown,
    FaceUp,
    Matched,
}

/// A card in a dealt deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position in the deck.
    pub index: CardIndex,

    /// Pair identifier.
    pub identifier: String,

    /// Current status.
    pub status: CardStatus,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(index: CardIndex, identifier: impl Into<String>) -> Self {
        Self {
            index,
            identifier: identifier.into(),
            status: CardStatus::FaceDown,
        }
    }

    /// Can this card be flipped right now?
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.status == CardStatus::FaceDown
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }

    /// Human-readable name for this card's identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        display_name(&self.identifier)
    }
}

/// Derive a person's name from an identifier.
///
/// Identifiers are often image paths such as `images/Gordon Bodily.jpg`;
/// the name is the last path segment up to its first `.`. Plain names pass
/// through unchanged.
#[must_use]
pub fn display_name(identifier: &str) -> &str {
    let file = identifier.rsplit('/').next().unwrap_or(identifier);
    file.split('.').next().unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_index() {
        let idx = CardIndex::new(4);
        assert_eq!(idx.raw(), 4);
        assert_eq!(format!("{}", idx), "Card#4");
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(CardIndex::new(0), "Alice");
        assert_eq!(card.status, CardStatus::FaceDown);
        assert!(card.is_face_down());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_display_name_from_path() {
        assert_eq!(display_name("images/Gordon Bodily.jpg"), "Gordon Bodily");
        assert_eq!(display_name("images/Robert Bodily Jr.jpg"), "Robert Bodily Jr");
        assert_eq!(display_name("a/b/c/Olive.png"), "Olive");
    }

    #[test]
    fn test_display_name_plain() {
        assert_eq!(display_name("Alice"), "Alice");
        assert_eq!(display_name(""), "");

        let card = Card::new(CardIndex::new(1), "images/Zelpha Allen Bodily.jpg");
        assert_eq!(card.display_name(), "Zelpha Allen Bodily");
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&CardStatus::Matched).unwrap();
        assert_eq!(json, "\"Matched\"");
        let back: CardStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CardStatus::Matched);
    }
}
