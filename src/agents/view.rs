//! What an agent knows about the table.

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::rules::{Pyramid, DRAWS_PER_TURN};

use super::Move;

/// An agent's mirror of both pyramids, the visible card and its remaining
/// draws this turn.
#[derive(Clone, Debug)]
pub struct TableView {
    player: PlayerId,
    pyramids: PlayerMap<Pyramid>,
    visible: Option<Card>,
    draws_remaining: u8,
    cards_played: usize,
}

impl TableView {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            pyramids: PlayerMap::default(),
            visible: None,
            draws_remaining: DRAWS_PER_TURN,
            cards_played: 0,
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Mirror of the agent's own pyramid.
    #[must_use]
    pub fn own(&self) -> &Pyramid {
        &self.pyramids[self.player]
    }

    /// Mirror of the opponent's pyramid.
    #[must_use]
    pub fn opponent(&self) -> &Pyramid {
        &self.pyramids[self.player.opponent()]
    }

    #[must_use]
    pub fn visible(&self) -> Option<Card> {
        self.visible
    }

    pub fn set_visible(&mut self, card: Option<Card>) {
        self.visible = card;
    }

    #[must_use]
    pub fn draws_remaining(&self) -> u8 {
        self.draws_remaining
    }

    /// Cards this agent has placed so far.
    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.cards_played
    }

    /// Spend one draw and emit [`Move::Draw`].
    pub fn record_draw(&mut self) -> Move {
        self.draws_remaining = self.draws_remaining.saturating_sub(1);
        Move::Draw
    }

    /// Place the visible card at `slot` and emit [`Move::PlayAt`].
    pub fn record_play(&mut self, slot: usize) -> Move {
        let card = self
            .visible
            .take()
            .expect("record_play requires a visible card");
        self.pyramids[self.player].place(slot, card);
        self.draws_remaining = DRAWS_PER_TURN;
        self.cards_played += 1;
        Move::PlayAt(slot)
    }

    /// Mirror the opponent's placement. The turn passes back to us.
    pub fn record_opponent_play(&mut self, card: Card, slot: usize) {
        self.pyramids[self.player.opponent()].place(slot, card);
        self.draws_remaining = DRAWS_PER_TURN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_updates_mirror() {
        let mut view = TableView::new(PlayerId::TWO);
        let card = Card::from_index(12);

        view.set_visible(Some(card));
        assert_eq!(view.record_draw(), Move::Draw);
        assert_eq!(view.draws_remaining(), 1);

        assert_eq!(view.record_play(4), Move::PlayAt(4));
        assert_eq!(view.own().get(4), Some(card));
        assert_eq!(view.visible(), None);
        assert_eq!(view.draws_remaining(), DRAWS_PER_TURN);
        assert_eq!(view.cards_played(), 1);
    }

    #[test]
    fn test_opponent_play_updates_other_mirror() {
        let mut view = TableView::new(PlayerId::ONE);
        view.record_draw();
        view.record_opponent_play(Card::from_index(3), 2);

        assert_eq!(view.opponent().get(2), Some(Card::from_index(3)));
        assert!(view.own().is_empty(2));
        assert_eq!(view.draws_remaining(), DRAWS_PER_TURN);
    }
}
