//! Opening placements for the sampling agent.
//!
//! Each agent picks one of six orientations when it is created. For its
//! first two plays it only considers the slots listed for that orientation.
//! The second-play list depends on whether the orientation's anchor slot
//! was taken by the first play. Orientation 5 has no table and considers
//! every legal slot.

use smallvec::SmallVec;

use crate::rules::{Pyramid, SLOT_COUNT};

/// Candidate slot list for one decision.
pub type SlotList = SmallVec<[usize; SLOT_COUNT]>;

struct SecondPlay {
    anchor: usize,
    anchor_taken: [usize; 3],
    anchor_open: [usize; 3],
}

const FIRST_PLAY: [Option<[usize; 2]>; 6] = [
    Some([0, 1]),
    Some([0, 2]),
    Some([3, 1]),
    Some([3, 4]),
    Some([5, 2]),
    None,
];

const SECOND_PLAY: [Option<SecondPlay>; 6] = [
    Some(SecondPlay { anchor: 0, anchor_taken: [1, 3, 4], anchor_open: [0, 3, 4] }),
    Some(SecondPlay { anchor: 0, anchor_taken: [2, 4, 5], anchor_open: [0, 4, 5] }),
    Some(SecondPlay { anchor: 3, anchor_taken: [0, 1, 2], anchor_open: [3, 0, 2] }),
    Some(SecondPlay { anchor: 3, anchor_taken: [4, 2, 5], anchor_open: [3, 2, 5] }),
    Some(SecondPlay { anchor: 5, anchor_taken: [2, 0, 1], anchor_open: [0, 1, 5] }),
    None,
];

/// Table lookup for the agent's first (`cards_played == 0`) and second
/// (`cards_played == 1`) plays. `None` means no restriction applies.
#[must_use]
pub fn opening_slots(orientation: u8, cards_played: usize, own: &Pyramid) -> Option<SlotList> {
    let orientation = orientation as usize;
    match cards_played {
        0 => FIRST_PLAY
            .get(orientation)
            .copied()
            .flatten()
            .map(|slots| SmallVec::from_slice(&slots)),
        1 => SECOND_PLAY.get(orientation)?.as_ref().map(|table| {
            let slots = if own.can_place(table.anchor) {
                &table.anchor_open
            } else {
                &table.anchor_taken
            };
            SmallVec::from_slice(slots)
        }),
        _ => None,
    }
}
