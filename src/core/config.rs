//! Rule constants and small enumerations shared across the engine.
//!
//! The rule set is fixed: nine pieces per side, flying at three pieces,
//! defeat below three. Nothing here is configurable at runtime.

use serde::{Deserialize, Serialize};

/// Pieces each side starts with in hand.
pub const PIECES_PER_PLAYER: u8 = 9;

/// On-board count at which a side may fly.
pub const FLYING_PIECES: u8 = 3;

/// A side with fewer pieces than this on the board (after placement) loses.
pub const MIN_PIECES: u8 = 3;

/// Identifier assigned by the caller when a game is created.
///
/// The engine never interprets it; it is carried through every snapshot so
/// the orchestrating layer can tell games apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Rule phase, derived from the piece counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// At least one side still has pieces in hand.
    Placement,
    /// All pieces placed; pieces slide along lines.
    Movement,
    /// All pieces placed and at least one side is down to three.
    ///
    /// Flying itself is a per-side privilege: only a side with exactly
    /// three pieces on the board may jump.
    Flying,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placement => write!(f, "placement"),
            Phase::Movement => write!(f, "movement"),
            Phase::Flying => write!(f, "flying"),
        }
    }
}

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Active,
    Finished,
}
