//! Cards and decks.
//!
//! - `Card`: identifier, deck position, and `CardStatus`
//! - `Deck`: the shuffled sequence of pairs for one game
//! - `build_deck`: doubles identifiers and shuffles them

mod card;
mod deck;

pub use card::{display_name, Card, CardIndex, CardStatus};
pub use deck::{build_deck, Deck};
