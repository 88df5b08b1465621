//! Batch harness for agent-versus-agent games.
//!
//! Stands in for a host application: it feeds the game's visible card to
//! the active agent, applies the returned move, and keeps both agents
//! informed. Batches derive every game and agent seed from one batch seed.
//!
//! ```
//! use pyramid_rummy::arena::{AgentKind, MatchConfig, MatchRunner};
//! use pyramid_rummy::core::PlayerId;
//!
//! let config = MatchConfig::new()
//!     .with_games(2)
//!     .with_agent(PlayerId::ONE, AgentKind::Reflex)
//!     .with_agent(PlayerId::TWO, AgentKind::Random);
//!
//! let stats = MatchRunner::from_config(&config).run_batch(&config).unwrap();
//! assert_eq!(stats.games, 2);
//! ```

pub mod config;
pub mod roster;
pub mod runner;
pub mod stats;

pub use config::MatchConfig;
pub use roster::AgentKind;
pub use runner::{MatchRecord, MatchRunner, MoveRecord};
pub use stats::BatchStats;
