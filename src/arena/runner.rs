//! Host loop that plays agents against each other.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::agents::{Agent, Move};
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::error::{MatchError, Result};
use crate::rules::{Game, GameStatus};

use super::config::MatchConfig;
use super::stats::BatchStats;

/// One move as applied to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub mv: Move,
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seed the shuffle and both agents were derived from.
    pub seed: u64,
    /// Every move in order.
    pub moves: Vec<MoveRecord>,
    pub status: GameStatus,
    pub scores: PlayerMap<i32>,
}

/// Drives a `Game` with one agent per seat.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    max_moves: usize,
}

impl MatchRunner {
    pub fn new(max_moves: usize) -> Self {
        Self { max_moves }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.max_moves)
    }

    /// Play `game` to the end.
    ///
    /// Draws are revealed to both agents; after a play the waiting agent
    /// learns the card and slot. Plays go through the checked entry point,
    /// so an agent proposing an illegal slot ends the match with an error.
    pub fn play(
        &self,
        game: &mut Game,
        agents: &mut PlayerMap<Box<dyn Agent>>,
    ) -> std::result::Result<Vec<MoveRecord>, MatchError> {
        let mut moves = Vec::new();

        while !game.is_over() {
            if moves.len() >= self.max_moves {
                return Err(MatchError::Stalled(self.max_moves));
            }

            let player = game.current_player();
            let agent = &mut agents[player];
            agent.set_visible_card(game.top_discard());
            let mv = agent.generate_move();
            moves.push(MoveRecord { player, mv });

            match mv {
                Move::Draw => {
                    let card = game.draw_card().ok_or(MatchError::DrawRefused { player })?;
                    for seat in PlayerId::all() {
                        agents[seat].reveal_card(card);
                    }
                }
                Move::PlayAt(slot) => {
                    let card = game
                        .try_play_card(slot)
                        .map_err(|source| MatchError::IllegalPlay { player, source })?;
                    agents[player.opponent()].accept_opponent_move(card, slot);
                }
            }
        }

        Ok(moves)
    }

    /// Play one game whose shuffle and agents all derive from `seed`.
    pub fn play_seeded(&self, config: &MatchConfig, seed: u64) -> Result<MatchRecord> {
        let streams = GameRng::new(seed);
        let mut agents = PlayerMap::try_new(|player| {
            let agent_seed = streams.for_context(&format!("agent-{}", player.index())).seed();
            config.agents[player].build(player, agent_seed, &config.sampling)
        })?;

        let mut game = Game::new(seed);
        let moves = self.play(&mut game, &mut agents)?;

        Ok(MatchRecord {
            seed,
            moves,
            status: game.state(),
            scores: game.scores(),
        })
    }

    /// Play every game of a batch.
    ///
    /// Game seeds are forked from the batch seed up front, so sequential
    /// and parallel batches produce the same records in the same order.
    pub fn play_batch(&self, config: &MatchConfig) -> Result<Vec<MatchRecord>> {
        config.validate()?;

        let mut root = GameRng::new(config.seed);
        let seeds: Vec<u64> = (0..config.games).map(|_| root.fork().seed()).collect();

        let records = if config.parallel {
            seeds
                .par_iter()
                .map(|&seed| self.play_seeded(config, seed))
                .collect::<Result<Vec<_>>>()?
        } else {
            seeds
                .iter()
                .map(|&seed| self.play_seeded(config, seed))
                .collect::<Result<Vec<_>>>()?
        };

        for (i, record) in records.iter().enumerate() {
            log::info!(
                "game {i}: {:?} ({} - {}, {} moves)",
                record.status,
                record.scores[PlayerId::ONE],
                record.scores[PlayerId::TWO],
                record.moves.len()
            );
        }
        Ok(records)
    }

    /// Play a batch and tally it.
    pub fn run_batch(&self, config: &MatchConfig) -> Result<BatchStats> {
        let records = self.play_batch(config)?;
        let stats = BatchStats::from_records(&records);
        log::info!(
            "{} vs {}: {}",
            config.agents[PlayerId::ONE],
            config.agents[PlayerId::TWO],
            stats
        );
        Ok(stats)
    }
}
