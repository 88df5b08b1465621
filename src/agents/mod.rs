//! Computer players.
//!
//! ## Agent protocol
//!
//! A host drives an agent through four calls:
//!
//! 1. `set_visible_card` with the game's current top discard before asking
//!    for a move,
//! 2. `generate_move`, which returns exactly one [`Move`] and updates the
//!    agent's own bookkeeping as if the move were applied,
//! 3. `reveal_card` on *both* agents whenever a card is drawn,
//! 4. `accept_opponent_move` on the waiting agent after every play.
//!
//! ## Variants
//!
//! - [`RandomAgent`]: redraws at random, plays anywhere legal
//! - [`ReflexAgent`]: plays the visible card where it scores best right now
//! - [`SampleAgent`]: Monte-Carlo sampling over the unseen cards

pub mod openings;
pub mod random;
pub mod reflex;
pub mod sampling;
pub mod view;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

pub use openings::{opening_slots, SlotList};
pub use random::RandomAgent;
pub use reflex::ReflexAgent;
pub use sampling::{Decision, SampleAgent};
pub use view::TableView;

/// A decision for the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Reveal another card from the draw pile.
    Draw,
    /// Take the visible card into this slot.
    PlayAt(usize),
}

/// Capability set shared by every computer player.
///
/// Agents are `Send` so a host can compute a decision on a worker thread.
pub trait Agent: Send {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    /// Seat this agent plays.
    fn player(&self) -> PlayerId;

    /// Choose the next move.
    fn generate_move(&mut self) -> Move;

    /// A card was drawn by either player and is now visible.
    fn reveal_card(&mut self, card: Card);

    /// The opponent took `card` into `slot`.
    fn accept_opponent_move(&mut self, card: Card, slot: usize);

    /// Synchronize the visible card before a move is requested.
    fn set_visible_card(&mut self, card: Option<Card>);
}
