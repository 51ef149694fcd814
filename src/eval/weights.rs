//! Evaluation weights.

use serde::{Deserialize, Serialize};

/// Per-term weights for [`MillHeuristic`](super::MillHeuristic).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Per piece of on-board material difference.
    pub piece: i32,

    /// Per closed mill difference.
    pub mill: i32,

    /// Per line holding two of a color and one empty point.
    pub potential_mill: i32,

    /// Per legal move of mobility difference.
    pub mobility: i32,

    /// Per opposing piece with nowhere to slide (minus own such pieces).
    pub blocked: i32,

    /// Added for a won game, subtracted for a lost one.
    pub win: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece: 10,
            mill: 50,
            potential_mill: 15,
            mobility: 2,
            blocked: 5,
            win: 10_000,
        }
    }
}

impl EvalWeights {
    /// Weights that count material only.
    #[must_use]
    pub fn material_only() -> Self {
        Self {
            piece: 1,
            mill: 0,
            potential_mill: 0,
            mobility: 0,
            blocked: 0,
            win: 10_000,
        }
    }

    /// Replace the mill weight.
    #[must_use]
    pub fn with_mill(mut self, mill: i32) -> Self {
        self.mill = mill;
        self
    }

    /// Replace the mobility weight.
    #[must_use]
    pub fn with_mobility(mut self, mobility: i32) -> Self {
        self.mobility = mobility;
        self
    }
}
