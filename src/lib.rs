//! # morris-engine
//!
//! Rules engine and deterministic alpha-beta search for Nine Men's Morris.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: A [`GameState`] is never mutated. Applying a
//!    move returns a new state; history is shared between snapshots via
//!    `im-rs`, so keeping every position of a game is cheap.
//!
//! 2. **Static Board Data**: Adjacency and the 16 mill lines are
//!    compile-time tables indexed by position.
//!
//! 3. **Closed Variants**: Moves and phases are enums matched exhaustively
//!    by validation and generation.
//!
//! 4. **Reproducible Search**: Move order is stable and evaluation is pure,
//!    so the same position always yields the same move.
//!
//! ## Usage
//!
//! ```
//! use morris_engine::{
//!     generate_legal_moves, is_valid_move, new_game, Color, GameId, Move, Position,
//!     SearchConfig, Searcher,
//! };
//!
//! let state = new_game(GameId::new(1));
//! let mv = Move::place(Position::new(4), Color::White);
//! assert!(is_valid_move(&state, mv));
//!
//! let state = state.apply_move(mv);
//! let mut searcher = Searcher::new(SearchConfig::new().with_max_depth(2));
//! let reply = searcher.select_move(&state, Color::Black);
//! assert!(generate_legal_moves(&state, Color::Black).contains(&reply));
//! ```
//!
//! ## Modules
//!
//! - `core`: colors, moves, constants, game state, setup builder, RNG
//! - `board`: positions, adjacency, mill lines, occupancy
//! - `rules`: validation, move generation, end-of-game detection
//! - `eval`: position evaluation
//! - `search`: alpha-beta search and move policies
//! - `error`: error types
//! - `python`: PyO3 bindings (feature `python`)

pub mod board;
pub mod core;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::state::new_game;
pub use crate::core::{
    Color, ColorMap, GameBuilder, GameId, GameRng, GameRngState, GameState, GameStatus, Move,
    MoveRecord, Phase, Snapshot, FLYING_PIECES, MIN_PIECES, PIECES_PER_PLAYER,
};

pub use crate::board::{Board, Mill, Position, MILL_COUNT, POSITION_COUNT};

pub use crate::error::{PositionError, RuleViolation, SetupError, SnapshotError};

pub use crate::rules::{
    can_fly, can_remove, check_game_over, determine_phase, generate_legal_moves,
    has_legal_moves, is_valid_move, validate_move, EndReason, GameOver, MoveList,
};

pub use crate::eval::{evaluate, EvalWeights, Evaluator, MillHeuristic};

pub use crate::search::{
    play_game, select_move, Difficulty, MovePolicy, RandomPolicy, SearchConfig, SearchResult,
    SearchStats, Searcher,
};
