//! Game state machine: draw pile, discard pile, two pyramids, turns.
//!
//! ## Turn structure
//!
//! The active player may reveal up to [`DRAWS_PER_TURN`] cards from the draw
//! pile onto the discard pile. The top of the discard pile is the visible
//! card; playing takes it into the active player's pyramid and passes the
//! turn. After [`TOTAL_PLAYS`] plays both pyramids are full and the game is
//! decided by score.
//!
//! ## Contract
//!
//! `draw_card` and `play_card` trust the caller. Drawing with no budget left
//! is a recoverable no-op; playing into an illegal slot or with nothing
//! visible is a caller defect. Use `try_play_card` for a validating entry
//! point.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, DECK_SIZE};
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::error::RulesError;

use super::pyramid::{Pyramid, SLOT_COUNT};

/// Reveals allowed per turn.
pub const DRAWS_PER_TURN: u8 = 2;

/// Plays in a complete game: every slot of both pyramids.
pub const TOTAL_PLAYS: usize = 2 * SLOT_COUNT;

/// Game progress. Every state other than `InProgress` is absorbing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameStatus {
    /// Decide the outcome from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<i32>) -> Self {
        let (one, two) = (scores[PlayerId::ONE], scores[PlayerId::TWO]);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameStatus::PlayerOneWin,
            std::cmp::Ordering::Less => GameStatus::PlayerTwoWin,
            std::cmp::Ordering::Equal => GameStatus::Draw,
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::PlayerOneWin => Some(PlayerId::ONE),
            GameStatus::PlayerTwoWin => Some(PlayerId::TWO),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// A two-player game of pyramid rummy.
///
/// Serializable for inspection only. A game is rebuilt with
/// [`Game::from_draw_pile`], never deserialized.
#[derive(Clone, Debug, Serialize)]
pub struct Game {
    /// Next card to reveal is the last element.
    draw_pile: Vec<Card>,
    /// Top (visible) card is the last element.
    discards: Vec<Card>,
    pyramids: PlayerMap<Pyramid>,
    turn: usize,
    status: GameStatus,
    draws_left: u8,
}

impl Game {
    /// New game with a deck shuffled from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed).for_context("shuffle");
        Self::from_draw_pile(Deck::shuffled(&mut rng))
    }

    /// New game revealing `cards` front to back.
    ///
    /// `cards` must be the full 40-card deck with no repeats.
    #[must_use]
    pub fn from_draw_pile(cards: Vec<Card>) -> Self {
        assert_eq!(cards.len(), DECK_SIZE, "Draw pile must hold the full deck");
        let mut draw_pile = cards;
        draw_pile.reverse();

        let game = Self {
            draw_pile,
            discards: Vec::with_capacity(DECK_SIZE),
            pyramids: PlayerMap::default(),
            turn: 0,
            status: GameStatus::InProgress,
            draws_left: DRAWS_PER_TURN,
        };
        game.debug_check_conservation();
        game
    }

    /// Seat to act: turn parity.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turn)
    }

    /// Peek at the visible card.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discards.last().copied()
    }

    /// Reveal the next card onto the discard pile.
    ///
    /// Returns `None`, changing nothing, when the turn's draw budget is
    /// spent, the draw pile is empty, or the game is over.
    pub fn draw_card(&mut self) -> Option<Card> {
        if self.draws_left == 0 || self.status.is_over() {
            return None;
        }
        let card = self.draw_pile.pop()?;
        self.draws_left -= 1;
        self.discards.push(card);

        log::debug!(
            "{} reveals {} ({} draws left, {} in pile)",
            self.current_player(),
            card,
            self.draws_left,
            self.draw_pile.len()
        );
        self.debug_check_conservation();
        Some(card)
    }

    /// Move the visible card into the active player's pyramid at `slot`.
    ///
    /// The caller must have checked `pyramid(current_player()).can_place(slot)`
    /// and that a card is visible.
    pub fn play_card(&mut self, slot: usize) -> Card {
        let player = self.current_player();
        let card = self
            .discards
            .pop()
            .expect("play_card requires a visible card");
        debug_assert!(
            self.pyramids[player].can_place(slot),
            "slot {slot} is not placeable for {player}"
        );

        self.pyramids[player].place(slot, card);
        self.turn += 1;
        self.draws_left = DRAWS_PER_TURN;
        log::debug!("{player} plays {card} at slot {slot} (turn {})", self.turn);

        if self.turn == TOTAL_PLAYS {
            let scores = self.scores();
            self.status = GameStatus::from_scores(&scores);
            log::debug!(
                "game over: {:?} ({} - {})",
                self.status,
                scores[PlayerId::ONE],
                scores[PlayerId::TWO]
            );
        }

        self.debug_check_conservation();
        card
    }

    /// Validating form of [`Game::play_card`].
    pub fn try_play_card(&mut self, slot: usize) -> Result<Card, RulesError> {
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }
        if self.discards.is_empty() {
            return Err(RulesError::NoVisibleCard);
        }
        if slot >= SLOT_COUNT {
            return Err(RulesError::SlotOutOfRange(slot));
        }
        if !self.pyramids[self.current_player()].can_place(slot) {
            return Err(RulesError::SlotNotPlaceable(slot));
        }
        Ok(self.play_card(slot))
    }

    #[must_use]
    pub fn state(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn pyramid(&self, player: PlayerId) -> &Pyramid {
        &self.pyramids[player]
    }

    /// Plays made so far.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn draws_left(&self) -> u8 {
        self.draws_left
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Discard pile, bottom first.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Current score of both pyramids.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        self.pyramids.map(Pyramid::score)
    }

    /// Every card in the draw pile, discard pile and both pyramids.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.draw_pile
            .iter()
            .chain(self.discards.iter())
            .copied()
            .chain(
                self.pyramids
                    .iter()
                    .flat_map(|(_, p)| p.cards().iter().flatten().copied()),
            )
    }

    fn debug_check_conservation(&self) {
        if cfg!(debug_assertions) {
            let mut seen = [false; DECK_SIZE];
            let mut count = 0;
            for card in self.all_cards() {
                assert!(!seen[card.index()], "card {card} appears twice");
                seen[card.index()] = true;
                count += 1;
            }
            assert_eq!(count, DECK_SIZE, "card count drifted");
        }
    }
}
