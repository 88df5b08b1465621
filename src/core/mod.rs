//! Core building blocks: seats, seeded randomness, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{SamplingConfig, ORIENTATION_COUNT};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
