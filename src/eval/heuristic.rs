//! Default mill-based heuristic.

use super::weights::EvalWeights;
use super::Evaluator;
use crate::board::{Board, MILLS};
use crate::core::{Color, GameState, Phase};
use crate::rules::can_fly;

/// Scores material, mills, near-mills, mobility and blocked pieces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MillHeuristic {
    weights: EvalWeights,
}

impl MillHeuristic {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Lines with two `color` pieces and one empty point.
    fn potential_mills(board: &Board, color: Color) -> i32 {
        MILLS
            .iter()
            .filter(|line| {
                let own = line
                    .iter()
                    .filter(|&&p| board.occupant(p) == Some(color))
                    .count();
                let empty = line.iter().filter(|&&p| board.is_empty(p)).count();
                own == 2 && empty == 1
            })
            .count() as i32
    }

    /// Moves `color` would have on its own turn, ignoring any pending
    /// capture.
    fn mobility(state: &GameState, color: Color) -> i32 {
        let board = state.board();
        if can_fly(state, color) {
            let empty = board.empty_positions().count();
            return (usize::from(state.on_board(color)) * empty) as i32;
        }
        board
            .positions_of(color)
            .map(|p| p.neighbors().iter().filter(|&&n| board.is_empty(n)).count())
            .sum::<usize>() as i32
    }

    /// `color` pieces that cannot slide anywhere. A flying side is never
    /// blocked.
    fn blocked_pieces(state: &GameState, color: Color) -> i32 {
        if can_fly(state, color) {
            return 0;
        }
        let board = state.board();
        board
            .positions_of(color)
            .filter(|&p| !board.has_empty_neighbor(p))
            .count() as i32
    }
}

impl Evaluator for MillHeuristic {
    fn evaluate(&self, state: &GameState, perspective: Color) -> i32 {
        let w = &self.weights;
        let own = perspective;
        let opp = perspective.opponent();
        let board = state.board();

        let mut score = 0;

        score += w.piece * (i32::from(state.on_board(own)) - i32::from(state.on_board(opp)));

        score += w.mill * (board.mills_for(own).len() as i32 - board.mills_for(opp).len() as i32);

        score += w.potential_mill
            * (Self::potential_mills(board, own) - Self::potential_mills(board, opp));

        // Placement mobility is the same empty-point count for both sides.
        if state.phase() != Phase::Placement {
            score += w.mobility * (Self::mobility(state, own) - Self::mobility(state, opp));
        }

        score += w.blocked * (Self::blocked_pieces(state, opp) - Self::blocked_pieces(state, own));

        match state.winner() {
            Some(winner) if winner == own => score += w.win,
            Some(_) => score -= w.win,
            None => {}
        }

        score
    }

    fn name(&self) -> &str {
        "mill-heuristic"
    }
}
