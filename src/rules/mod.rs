//! Stateless rules over [`GameState`](crate::core::GameState) snapshots.
//!
//! - `validation`: per-move checks, phase derivation, mill protection
//! - `movegen`: legal move enumeration in a stable order
//! - `outcome`: end-of-game detection
//!
//! Every function here is pure. The state module calls into the rules
//! for phase and result; callers use them to vet moves before
//! [`apply_move`](crate::core::GameState::apply_move).

pub mod movegen;
pub mod outcome;
pub mod validation;

pub use movegen::{generate_legal_moves, has_legal_moves, MoveList};
pub use outcome::{check_game_over, EndReason, GameOver};
pub use validation::{can_fly, can_remove, determine_phase, is_valid_move, validate_move};
