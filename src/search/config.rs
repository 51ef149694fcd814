//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::eval::EvalWeights;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// Preset strength levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    /// Search depth for this level.
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => DEFAULT_DEPTH,
        }
    }
}

/// Alpha-beta search configuration.
///
/// Depth is the only latency knob: there is no time limit and no
/// cancellation, so callers needing a bound pick a smaller depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to look ahead. Zero scores the root's children statically.
    pub max_depth: u8,

    /// Weights for the default heuristic.
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Create a config with default depth and weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for a preset level.
    #[must_use]
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::default().with_max_depth(difficulty.depth())
    }

    /// Set the search depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the heuristic weights.
    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}
