//! # pyramid-rummy
//!
//! Rule engine and computer players for pyramid rummy, a two-player card
//! game. Each turn the active player may reveal up to two cards and then
//! takes the visible card into one of the ten slots of their pyramid.
//! Lower slots must be filled before the slots resting on them open up.
//! When both pyramids are full, six three-card edges per pyramid are
//! scored by the majority-color rule.
//!
//! ## Design Principles
//!
//! 1. **Trust the caller**: the engine does not re-validate placements on
//!    its hot path. `Game::try_play_card` is the checked entry point.
//!
//! 2. **Owned randomness**: the shuffle and every agent hold their own
//!    seeded `GameRng`. Games replay exactly from their seeds.
//!
//! 3. **Agents behind one trait**: random, reflex and sampling players all
//!    implement `Agent` and are chosen per seat.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, sampling configuration
//! - `cards`: cards, the stable card index, the deck
//! - `rules`: pyramid legality and scoring, the game state machine
//! - `agents`: the `Agent` trait and its implementations
//! - `arena`: batch harness for simulated games
//! - `error`: error types

pub mod agents;
pub mod arena;
pub mod cards;
pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, PlayerId, PlayerMap, SamplingConfig};

pub use crate::cards::{Card, Color, Deck, DECK_SIZE};

pub use crate::rules::{Game, GameStatus, Pyramid, DRAWS_PER_TURN, EDGES, SLOT_COUNT, TOTAL_PLAYS};

pub use crate::agents::{Agent, Decision, Move, RandomAgent, ReflexAgent, SampleAgent};

pub use crate::arena::{AgentKind, BatchStats, MatchConfig, MatchRecord, MatchRunner};

pub use crate::error::{ConfigError, Error, MatchError, Result, RulesError};
