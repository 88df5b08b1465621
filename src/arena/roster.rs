//! Agent selection per seat.

use serde::{Deserialize, Serialize};

use crate::agents::{Agent, RandomAgent, ReflexAgent, SampleAgent};
use crate::core::{PlayerId, SamplingConfig};
use crate::error::ConfigError;

/// Which agent variant sits in a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum AgentKind {
    Random,
    Reflex,
    #[default]
    Sampling,
}

impl AgentKind {
    /// Construct the agent for `player` with its own stream.
    pub fn build(
        self,
        player: PlayerId,
        seed: u64,
        sampling: &SamplingConfig,
    ) -> Result<Box<dyn Agent>, ConfigError> {
        let agent: Box<dyn Agent> = match self {
            AgentKind::Random => Box::new(RandomAgent::new(player, seed)),
            AgentKind::Reflex => Box::new(ReflexAgent::new(player)),
            AgentKind::Sampling => Box::new(SampleAgent::new(player, seed, sampling.clone())?),
        };
        Ok(agent)
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AgentKind::Random => "random",
            AgentKind::Reflex => "reflex",
            AgentKind::Sampling => "sampling",
        };
        f.write_str(name)
    }
}
