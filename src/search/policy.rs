//! Move policies and self-play.
//!
//! A policy picks one move for one side. The alpha-beta [`Searcher`] and
//! the seeded [`RandomPolicy`] both implement [`MovePolicy`], so tests and
//! benchmarks can pit any two against each other through [`play_game`].

use log::debug;

use super::alphabeta::Searcher;
use crate::core::{Color, GameRng, GameRngState, GameState, Move};
use crate::eval::Evaluator;
use crate::rules::{generate_legal_moves, has_legal_moves};

/// Something that picks moves.
pub trait MovePolicy {
    /// Pick a move for `color`, or `None` if `color` is not to move or
    /// has no legal move.
    fn choose(&mut self, state: &GameState, color: Color) -> Option<Move>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

impl<E: Evaluator> MovePolicy for Searcher<E> {
    fn choose(&mut self, state: &GameState, color: Color) -> Option<Move> {
        if state.active_player() != color || !has_legal_moves(state, color) {
            return None;
        }
        Some(self.select_move(state, color))
    }

    fn name(&self) -> &str {
        "alpha-beta"
    }
}

/// Uniform choice among legal moves.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Position of the underlying stream, for pausing a self-play run.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume a policy saved with [`rng_state`](Self::rng_state).
    #[must_use]
    pub fn from_rng_state(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(state))
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, state: &GameState, color: Color) -> Option<Move> {
        if state.active_player() != color {
            return None;
        }
        let moves = generate_legal_moves(state, color);
        self.rng.choose(moves.as_slice()).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Play from `state` until the game finishes or `max_plies` moves have
/// been applied. Movement-phase games can cycle, so the cap is required.
pub fn play_game(
    mut state: GameState,
    white: &mut dyn MovePolicy,
    black: &mut dyn MovePolicy,
    max_plies: u32,
) -> GameState {
    for _ in 0..max_plies {
        let to_move = state.active_player();
        let policy: &mut dyn MovePolicy = match to_move {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let Some(mv) = policy.choose(&state, to_move) else {
            break;
        };
        state = state.apply_move(mv);
        if state.is_finished() {
            break;
        }
    }
    debug!(
        "{}: self-play stopped after {} plies, winner {:?}",
        state.id(),
        state.ply(),
        state.winner()
    );
    state
}
