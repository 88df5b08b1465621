//! Rules of pyramid rummy.
//!
//! - `Pyramid`: placement legality and edge scoring for one board
//! - `Game`: piles, turn order, draw budget and the terminal decision
//!
//! Hosts mutate a `Game` only through `draw_card` and `play_card`
//! (or the checked `try_play_card`).

pub mod game;
pub mod pyramid;

pub use game::{Game, GameStatus, DRAWS_PER_TURN, TOTAL_PLAYS};
pub use pyramid::{
    can_place_in, score_slots, tentative_score_slots, Pyramid, Slots, BASE_SLOTS, EDGES,
    PREREQUISITES, SLOT_COUNT,
};
