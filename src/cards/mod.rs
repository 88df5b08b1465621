//! Cards and the deck.
//!
//! - `Card`: rank 1..=10, a color, and a copy bit; immutable once created
//! - `Deck`: the 40-card composition and its seeded shuffle

pub mod card;
pub mod deck;

pub use card::{Card, Color, DECK_SIZE, MAX_RANK};
pub use deck::Deck;
