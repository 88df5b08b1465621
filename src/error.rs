//! Error types.
//!
//! The engine itself trusts its caller (see `Game::play_card`). These errors
//! come from the checked entry points, configuration validation and the
//! batch harness.

use crate::core::PlayerId;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("iterations must be at least 1")]
    ZeroIterations,

    #[error("draw iterations must be at least 1")]
    ZeroDrawIterations,

    #[error("orientation {0} is out of range (0..6)")]
    Orientation(u8),

    #[error("a batch needs at least one game")]
    ZeroGames,
}

/// A move the rules do not allow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("the game is already over")]
    GameOver,

    #[error("no card is visible to play")]
    NoVisibleCard,

    #[error("slot {0} does not exist")]
    SlotOutOfRange(usize),

    #[error("slot {0} is occupied or its supporting slots are empty")]
    SlotNotPlaceable(usize),

    #[error("card index {0} is out of range (0..40)")]
    InvalidCard(u8),

    #[error("seat {0} does not exist")]
    InvalidSeat(u8),
}

/// Failures while driving a match between agents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("{player} made an illegal play: {source}")]
    IllegalPlay {
        player: PlayerId,
        #[source]
        source: RulesError,
    },

    #[error("{player} asked to draw with no draws left")]
    DrawRefused { player: PlayerId },

    #[error("match did not finish within {0} moves")]
    Stalled(usize),
}

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("rules error: {0}")]
    Rules(#[from] RulesError),

    #[error("match error: {0}")]
    Match(#[from] MatchError),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, Error>;
