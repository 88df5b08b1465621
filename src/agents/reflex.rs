//! Greedy one-step player.

use crate::cards::Card;
use crate::core::PlayerId;

use super::{Agent, Move, TableView};

/// Takes the visible card immediately, into whichever legal slot gives the
/// highest tentative score (lowest slot on ties). Only draws when nothing
/// is visible.
#[derive(Clone, Debug)]
pub struct ReflexAgent {
    view: TableView,
}

impl ReflexAgent {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            view: TableView::new(player),
        }
    }

    #[must_use]
    pub fn view(&self) -> &TableView {
        &self.view
    }
}

impl Agent for ReflexAgent {
    fn name(&self) -> &'static str {
        "reflex"
    }

    fn player(&self) -> PlayerId {
        self.view.player()
    }

    fn generate_move(&mut self) -> Move {
        let Some(card) = self.view.visible() else {
            return self.view.record_draw();
        };

        let own = self.view.own();
        let mut best: Option<(usize, i32)> = None;
        for slot in own.placeable_slots() {
            let score = own.tentative_score(card, slot);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((slot, score));
            }
        }

        let (slot, _) = best.expect("a full pyramid cannot be asked to play");
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
