//! Core value types: colors, moves, rule constants, game snapshots, RNG.
//!
//! Everything here is a plain value. A [`GameState`] is never mutated in
//! place; applying a move yields a new snapshot and leaves the old one
//! intact.

pub mod action;
pub mod builder;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use builder::GameBuilder;
pub use config::{GameId, GameStatus, Phase, FLYING_PIECES, MIN_PIECES, PIECES_PER_PLAYER};
pub use player::{Color, ColorMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Snapshot};
