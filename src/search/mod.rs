//! Move selection.
//!
//! - `alphabeta`: depth-limited minimax with alpha-beta pruning
//! - `config`: depth and weight configuration, difficulty presets
//! - `stats`: per-search counters
//! - `policy`: the `MovePolicy` seam, a seeded random policy, self-play

pub mod alphabeta;
pub mod config;
pub mod policy;
pub mod stats;

pub use alphabeta::{select_move, SearchResult, Searcher};
pub use config::{Difficulty, SearchConfig, DEFAULT_DEPTH};
pub use policy::{play_game, MovePolicy, RandomPolicy};
pub use stats::SearchStats;
