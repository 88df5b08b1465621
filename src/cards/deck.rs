//! Deck composition and shuffling.

use crate::core::GameRng;

use super::card::{Card, DECK_SIZE};

/// The fixed 40-card deck.
pub struct Deck;

impl Deck {
    /// All 40 cards in index order.
    #[must_use]
    pub fn standard() -> Vec<Card> {
        (0..DECK_SIZE).map(Card::from_index).collect()
    }

    /// All 40 cards in a seeded random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Vec<Card> {
        let mut cards = Self::standard();
        rng.shuffle(&mut cards);
        cards
    }
}
