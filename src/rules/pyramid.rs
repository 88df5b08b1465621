//! One player's ten-slot pyramid.
//!
//! ```text
//!   base:    0  1  2  3  4  5
//!   middle:  6 <- {0,1,2}   7 <- {1,3,4}   8 <- {2,4,5}
//!   apex:    9 <- {6,7,8}
//! ```
//!
//! Base slots take a card whenever they are empty. Upper slots also need
//! every supporting slot filled. Six three-slot edges are scored with the
//! majority-color rule: an edge is worth the value of the one card whose
//! color differs from the other two, or nothing when all three match.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Slots per pyramid.
pub const SLOT_COUNT: usize = 10;

/// Base slots: `0..BASE_SLOTS`.
pub const BASE_SLOTS: usize = 6;

/// Supporting slots for each upper slot, indexed by `slot - BASE_SLOTS`.
pub const PREREQUISITES: [[usize; 3]; 4] = [[0, 1, 2], [1, 3, 4], [2, 4, 5], [6, 7, 8]];

/// The six scoring edges.
pub const EDGES: [[usize; 3]; 6] = [
    [0, 1, 3],
    [0, 2, 5],
    [3, 4, 5],
    [0, 6, 9],
    [3, 7, 9],
    [5, 8, 9],
];

/// Slot contents: empty or a card.
pub type Slots = [Option<Card>; SLOT_COUNT];

/// A player's board.
///
/// Slot indices passed to any method must be in `0..SLOT_COUNT`; callers
/// validate them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pyramid {
    slots: Slots,
}

impl Pyramid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pyramid from explicit slot contents.
    #[must_use]
    pub fn from_slots(slots: Slots) -> Self {
        Self { slots }
    }

    #[must_use]
    pub fn cards(&self) -> &Slots {
        &self.slots
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Card> {
        self.slots[slot]
    }

    #[must_use]
    pub fn is_empty(&self, slot: usize) -> bool {
        self.slots[slot].is_none()
    }

    /// Whether `slot` can take a card right now.
    #[must_use]
    pub fn can_place(&self, slot: usize) -> bool {
        can_place_in(&self.slots, slot)
    }

    /// Put `card` into `slot`, returning whatever was there.
    ///
    /// Legality is not checked here.
    pub fn place(&mut self, slot: usize, card: Card) -> Option<Card> {
        self.slots[slot].replace(card)
    }

    /// Placeable slots in ascending order.
    pub fn placeable_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SLOT_COUNT).filter(move |&slot| self.can_place(slot))
    }

    /// Empty slots in ascending order.
    pub fn empty_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SLOT_COUNT).filter(move |&slot| self.is_empty(slot))
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled_count() == SLOT_COUNT
    }

    /// Score of the realized board.
    #[must_use]
    pub fn score(&self) -> i32 {
        score_slots(&self.slots)
    }

    /// Score as if `card` sat in `slot`. The board is not modified.
    #[must_use]
    pub fn tentative_score(&self, card: Card, slot: usize) -> i32 {
        tentative_score_slots(&self.slots, card, slot)
    }

    /// Score of a single edge of the realized board.
    #[must_use]
    pub fn edge_score(&self, edge: [usize; 3]) -> i32 {
        edge_score_slots(&self.slots, edge)
    }
}

/// Placement rule over a raw slot array.
#[must_use]
pub fn can_place_in(slots: &Slots, slot: usize) -> bool {
    if slots[slot].is_some() {
        return false;
    }
    if slot < BASE_SLOTS {
        return true;
    }
    PREREQUISITES[slot - BASE_SLOTS]
        .iter()
        .all(|&below| slots[below].is_some())
}

/// Sum of all six edges.
#[must_use]
pub fn score_slots(slots: &Slots) -> i32 {
    EDGES.iter().map(|&edge| edge_score_slots(slots, edge)).sum()
}

/// Score with `card` substituted at `slot`, computed on a local copy.
#[must_use]
pub fn tentative_score_slots(slots: &Slots, card: Card, slot: usize) -> i32 {
    let mut trial = *slots;
    trial[slot] = Some(card);
    score_slots(&trial)
}

fn edge_score_slots(slots: &Slots, edge: [usize; 3]) -> i32 {
    let (Some(a), Some(b), Some(c)) = (slots[edge[0]], slots[edge[1]], slots[edge[2]]) else {
        return 0;
    };

    // With two colors, at most one card can differ from both others.
    if a.color() == b.color() && b.color() == c.color() {
        0
    } else if a.color() == b.color() {
        c.value()
    } else if a.color() == c.color() {
        b.value()
    } else {
        a.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn red(rank: u8) -> Card {
        Card::new(rank, Color::Red, 0)
    }

    fn white(rank: u8) -> Card {
        Card::new(rank, Color::White, 0)
    }

    #[test]
    fn test_empty_pyramid() {
        let p = Pyramid::new();
        assert_eq!(p.score(), 0);
        assert_eq!(p.filled_count(), 0);
        assert_eq!(p.placeable_slots().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(p.empty_slots().count(), SLOT_COUNT);
    }

    #[test]
    fn test_middle_slots_need_support() {
        let mut p = Pyramid::new();
        p.place(0, red(1));
        p.place(1, red(2));
        assert!(!p.can_place(6));

        p.place(2, red(3));
        assert!(p.can_place(6));
        assert!(!p.can_place(7));
        assert!(!p.can_place(8));

        p.place(3, red(4));
        p.place(4, red(5));
        assert!(p.can_place(7));
        assert!(!p.can_place(8));

        p.place(5, red(6));
        assert!(p.can_place(8));
        assert!(!p.can_place(9));
    }

    #[test]
    fn test_apex_needs_middle_layer() {
        let mut p = Pyramid::new();
        for slot in 0..9 {
            p.place(slot, white(slot as u8 + 1));
        }
        assert!(p.can_place(9));
        p.place(9, white(10));
        assert!(!p.can_place(9));
        assert!(p.is_complete());
    }

    #[test]
    fn test_occupied_slot_not_placeable() {
        let mut p = Pyramid::new();
        p.place(4, red(1));
        assert!(!p.can_place(4));
    }

    #[test]
    fn test_edge_odd_card_scores() {
        let mut p = Pyramid::new();
        p.place(0, red(5));
        p.place(1, red(5));
        p.place(3, white(5));
        assert_eq!(p.edge_score([0, 1, 3]), 5);
        assert_eq!(p.score(), 5);
    }

    #[test]
    fn test_edge_all_same_color_scores_zero() {
        let mut p = Pyramid::new();
        p.place(0, red(5));
        p.place(1, Card::new(5, Color::Red, 1));
        p.place(3, red(7));
        assert_eq!(p.edge_score([0, 1, 3]), 0);
    }

    #[test]
    fn test_edge_with_gap_scores_zero() {
        let mut p = Pyramid::new();
        p.place(0, red(5));
        p.place(3, white(9));
        assert_eq!(p.edge_score([0, 1, 3]), 0);
        assert_eq!(p.score(), 0);
    }

    #[test]
    fn test_odd_card_in_each_position() {
        let mut p = Pyramid::new();
        p.place(0, white(2));
        p.place(1, red(7));
        p.place(3, red(8));
        assert_eq!(p.edge_score([0, 1, 3]), 2);

        let mut p = Pyramid::new();
        p.place(0, red(2));
        p.place(1, white(7));
        p.place(3, red(8));
        assert_eq!(p.edge_score([0, 1, 3]), 7);
    }

    #[test]
    fn test_full_board_score() {
        // Base 0..6 alternates colors, middle and apex are red.
        let mut p = Pyramid::new();
        p.place(0, white(1));
        p.place(1, red(2));
        p.place(2, white(3));
        p.place(3, red(4));
        p.place(4, white(5));
        p.place(5, red(6));
        p.place(6, red(7));
        p.place(7, red(8));
        p.place(8, red(9));
        p.place(9, red(10));

        // (0,1,3): w r r -> 1
        // (0,2,5): w w r -> 6
        // (3,4,5): r w r -> 5
        // (0,6,9): w r r -> 1
        // (3,7,9): r r r -> 0
        // (5,8,9): r r r -> 0
        assert_eq!(p.score(), 13);
    }

    #[test]
    fn test_tentative_score_is_pure() {
        let mut p = Pyramid::new();
        p.place(0, red(5));
        p.place(1, red(5));
        let before = p.clone();

        assert_eq!(p.tentative_score(white(9), 3), 9);
        assert_eq!(p, before);
        assert_eq!(p.score(), 0);
        assert!(p.is_empty(3));
    }

    #[test]
    fn test_tentative_score_overrides_slot() {
        let mut p = Pyramid::new();
        p.place(0, red(5));
        p.place(1, red(5));
        p.place(3, white(4));
        assert_eq!(p.score(), 4);
        assert_eq!(p.tentative_score(red(4), 3), 0);
        assert_eq!(p.score(), 4);
    }
}
