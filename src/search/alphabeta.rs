//! Depth-limited minimax with alpha-beta pruning.
//!
//! The side to maximize is fixed at the root (`ai_color`). Because a
//! mill-forming move keeps the turn for the follow-up capture, a node
//! maximizes whenever `ai_color` is to move there rather than on
//! alternating plies.
//!
//! Children are visited in [`generate_legal_moves`] order with no
//! reordering, and the root keeps the first move reaching the best
//! score. Two searches of the same position always return the same move
//! and the same statistics.

use std::time::Instant;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::config::SearchConfig;
use super::stats::SearchStats;
use crate::core::{Color, GameState, Move};
use crate::eval::{Evaluator, MillHeuristic};
use crate::rules::generate_legal_moves;

/// Score bound; every evaluation lies strictly inside `-INF..INF`.
const INF: i32 = i32::MAX;

/// Outcome of one search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen move, always one of the root's legal moves.
    pub best_move: Move,
    /// Minimax value of `best_move` for the searching side.
    pub score: i32,
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
pub struct Searcher<E: Evaluator = MillHeuristic> {
    config: SearchConfig,
    evaluator: E,
    stats: SearchStats,
}

impl Searcher<MillHeuristic> {
    /// Create a searcher using the default heuristic with the configured
    /// weights.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, MillHeuristic::new(config.weights))
    }
}

impl Default for Searcher<MillHeuristic> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<E: Evaluator> Searcher<E> {
    /// Create a searcher with a custom evaluator. `config.weights` is
    /// ignored.
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            stats: SearchStats::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Statistics from the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `state` for `ai_color` and return the best move.
    ///
    /// # Panics
    ///
    /// Panics if `ai_color` is not the side to move or has no legal move
    /// (this includes finished games).
    pub fn search(&mut self, state: &GameState, ai_color: Color) -> SearchResult {
        assert_eq!(
            state.active_player(),
            ai_color,
            "search for {ai_color} but {} is to move",
            state.active_player()
        );
        let moves = generate_legal_moves(state, ai_color);
        assert!(
            !moves.is_empty(),
            "search for {ai_color} on {} with no legal moves",
            state.id()
        );

        self.stats.reset();
        let start = Instant::now();
        let child_depth = self.config.max_depth.saturating_sub(1);

        let mut best_move = moves[0];
        let mut best_score = -INF;
        let mut alpha = -INF;

        for &mv in &moves {
            let child = state.transition(mv);
            let score = self.minimax(&child, child_depth, alpha, INF, ai_color, 1);
            trace!("{}: root {mv} scores {score}", state.id());

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            alpha = alpha.max(best_score);
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{}: depth {} chose {best_move} (score {best_score}, {} nodes, {} cutoffs, {}us)",
            state.id(),
            self.config.max_depth,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.time_us
        );

        SearchResult {
            best_move,
            score: best_score,
            stats: self.stats.clone(),
        }
    }

    /// Shorthand for `search(..).best_move`.
    pub fn select_move(&mut self, state: &GameState, ai_color: Color) -> Move {
        self.search(state, ai_color).best_move
    }

    fn minimax(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        ai_color: Color,
        ply: u8,
    ) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(ply);

        if depth == 0 || state.is_finished() {
            return self.leaf(state, depth, ai_color);
        }

        let to_move = state.active_player();
        let moves = generate_legal_moves(state, to_move);
        if moves.is_empty() {
            return self.leaf(state, depth, ai_color);
        }

        if to_move == ai_color {
            let mut value = -INF;
            for &mv in &moves {
                let child = state.transition(mv);
                value = value.max(self.minimax(&child, depth - 1, alpha, beta, ai_color, ply + 1));
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        } else {
            let mut value = INF;
            for &mv in &moves {
                let child = state.transition(mv);
                value = value.min(self.minimax(&child, depth - 1, alpha, beta, ai_color, ply + 1));
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        }
    }

    /// Static score; decided games found with depth to spare are pushed
    /// further from zero so quicker wins and slower losses rank first.
    fn leaf(&mut self, state: &GameState, depth: u8, ai_color: Color) -> i32 {
        self.stats.leaf_evaluations += 1;
        let score = self.evaluator.evaluate(state, ai_color);
        let bonus = i32::from(depth);
        let score = match state.winner() {
            Some(winner) if winner == ai_color => score.saturating_add(bonus),
            Some(_) => score.saturating_sub(bonus),
            None => score,
        };
        score.clamp(-INF, INF)
    }
}

/// Pick a move for `ai_color` at the default depth.
///
/// # Panics
///
/// Panics under the same conditions as [`Searcher::search`].
#[must_use]
pub fn select_move(state: &GameState, ai_color: Color) -> Move {
    Searcher::new(SearchConfig::default()).select_move(state, ai_color)
}
