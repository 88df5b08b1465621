//! Sampling agent configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of opening orientations the sampling agent chooses between.
pub const ORIENTATION_COUNT: u8 = 6;

/// Parameters of the sampling decision procedure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Hypothetical completions of the empty slots sampled per decision.
    pub iterations: usize,

    /// Hypothetical future draws simulated per completion when weighing
    /// a redraw against playing the visible card.
    pub draw_iterations: usize,

    /// Opening orientation (0..6). `None` draws one from the agent's own
    /// stream at construction.
    pub orientation: Option<u8>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            draw_iterations: 20,
            orientation: None,
        }
    }
}

impl SamplingConfig {
    /// Set completions per decision.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set lookahead draws per completion.
    #[must_use]
    pub fn with_draw_iterations(mut self, draw_iterations: usize) -> Self {
        self.draw_iterations = draw_iterations;
        self
    }

    /// Pin the opening orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: u8) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.draw_iterations == 0 {
            return Err(ConfigError::ZeroDrawIterations);
        }
        match self.orientation {
            Some(o) if o >= ORIENTATION_COUNT => Err(ConfigError::Orientation(o)),
            _ => Ok(()),
        }
    }
}
