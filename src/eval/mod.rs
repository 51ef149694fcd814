//! Static position evaluation.
//!
//! Evaluators are pure: the same state and perspective always give the
//! same score. Alpha-beta pruning and reproducible searches both depend
//! on it.

pub mod heuristic;
pub mod weights;

pub use heuristic::MillHeuristic;
pub use weights::EvalWeights;

use crate::core::{Color, GameState};

/// Scores a position for one side.
pub trait Evaluator: Send + Sync {
    /// Score `state` from `perspective`'s point of view.
    ///
    /// Positive favors `perspective`; negative favors its opponent.
    fn evaluate(&self, state: &GameState, perspective: Color) -> i32;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Score a position with the default heuristic and weights.
#[must_use]
pub fn evaluate(state: &GameState, perspective: Color) -> i32 {
    MillHeuristic::default().evaluate(state, perspective)
}
