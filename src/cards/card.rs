//! Card values and their stable 0..40 index.
//!
//! The deck holds ranks 1..=10 in two colors, two copies of each
//! rank/color pair. Every card maps to a unique index
//! `color * 20 + copy * 10 + (rank - 1)`, which agents use as the key of
//! their seen-set.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 40;

/// Highest rank.
pub const MAX_RANK: u8 = 10;

/// Card color. Edges are scored by which card differs in color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
}

impl Color {
    /// Numeric color used by the card index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Red => 1,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        if index == 0 {
            Color::White
        } else {
            Color::Red
        }
    }

    /// Short symbol used in card labels.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
        }
    }
}

/// An immutable playing card. Serialized as its stable index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card {
    rank: u8,
    color: Color,
    copy: u8,
}

impl Card {
    /// Create a card. `rank` must be 1..=10 and `copy` 0 or 1.
    #[must_use]
    pub const fn new(rank: u8, color: Color, copy: u8) -> Self {
        assert!(rank >= 1 && rank <= MAX_RANK, "Rank must be 1..=10");
        assert!(copy < 2, "Copy must be 0 or 1");
        Self { rank, color, copy }
    }

    /// Card with the given stable index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < DECK_SIZE, "Card index must be below 40");
        Self {
            rank: (index % 10) as u8 + 1,
            color: Color::from_index(index / 20),
            copy: ((index / 10) % 2) as u8,
        }
    }

    /// Stable index in `0..40`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.color.index() * 20 + self.copy as usize * 10 + self.rank as usize - 1
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Which of the two same rank/color duplicates this is.
    #[must_use]
    pub const fn copy(self) -> u8 {
        self.copy
    }

    /// Points the card is worth when it is the odd color on an edge.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.rank as i32
    }
}

impl TryFrom<u8> for Card {
    type Error = RulesError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < DECK_SIZE {
            Ok(Self::from_index(index as usize))
        } else {
            Err(RulesError::InvalidCard(index))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.index() as u8
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rank == MAX_RANK {
            write!(f, "T{}", self.color.symbol())
        } else {
            write!(f, "{}{}", self.rank, self.color.symbol())
        }
    }
}
