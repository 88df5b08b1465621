//! Uniform random baseline.

use crate::cards::Card;
use crate::core::{GameRng, PlayerId};

use super::{Agent, Move, SlotList, TableView};

/// Redraws with probability `budget / (budget + 1)` while draws remain,
/// then plays at a uniformly random legal slot.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    view: TableView,
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(player: PlayerId, seed: u64) -> Self {
        Self {
            view: TableView::new(player),
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn view(&self) -> &TableView {
        &self.view
    }

    /// Uniform choice over the placeable slots.
    fn choose_slot(&mut self) -> usize {
        let open: SlotList = self.view.own().placeable_slots().collect();
        *self
            .rng
            .choose(&open)
            .expect("a full pyramid cannot be asked to play")
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn player(&self) -> PlayerId {
        self.view.player()
    }

    fn generate_move(&mut self) -> Move {
        if self.view.visible().is_none() {
            return self.view.record_draw();
        }

        let budget = self.view.draws_remaining() as usize;
        if budget > 0 && self.rng.below(budget + 1) != 0 {
            return self.view.record_draw();
        }

        let slot = self.choose_slot();
        self.view.record_play(slot)
    }

    fn reveal_card(&mut self, card: Card) {
        self.view.set_visible(Some(card));
    }

    fn accept_opponent_move(&mut self, card: Card, slot: usize) {
        self.view.record_opponent_play(card, slot);
    }

    fn set_visible_card(&mut self, card: Option<Card>) {
        self.view.set_visible(card);
    }
}
