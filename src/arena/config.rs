//! Batch configuration.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap, SamplingConfig};
use crate::error::ConfigError;

use super::roster::AgentKind;

/// Configuration for a batch of simulated games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Games to play.
    pub games: usize,

    /// Batch seed. Game and agent seeds are derived from it.
    pub seed: u64,

    /// Moves (draws and plays) after which a game counts as stalled.
    pub max_moves: usize,

    /// Run games on the rayon pool.
    pub parallel: bool,

    /// Agent variant per seat.
    pub agents: PlayerMap<AgentKind>,

    /// Parameters for sampling agents.
    pub sampling: SamplingConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            seed: 0,
            max_moves: 200,
            parallel: false,
            agents: PlayerMap::with_value(AgentKind::Sampling),
            sampling: SamplingConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the batch seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the stall limit.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// Run games in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Seat an agent variant.
    #[must_use]
    pub fn with_agent(mut self, player: PlayerId, kind: AgentKind) -> Self {
        self.agents[player] = kind;
        self
    }

    /// Set sampling parameters.
    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::ZeroGames);
        }
        self.sampling.validate()
    }
}
