//! Move representation and history records.
//!
//! A move is one of three closed variants, each naming the color that makes
//! it. A mill-forming `Place` or `Step` is always followed by a `Capture`
//! from the same color before the turn passes.

use serde::{Deserialize, Serialize};

use super::player::Color;
use crate::board::Position;

/// A single move.
///
/// ## Example
///
/// ```
/// use morris_engine::board::Position;
/// use morris_engine::core::{Color, Move};
///
/// let mv = Move::place(Position::new(4), Color::White);
/// assert_eq!(mv.player(), Color::White);
/// assert_eq!(mv.destination(), Some(Position::new(4)));
/// assert_eq!(mv.to_string(), "White places at 4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put a piece from hand onto an empty point.
    Place { to: Position, player: Color },
    /// Move a piece to another point (adjacent, or anywhere when flying).
    Step {
        from: Position,
        to: Position,
        player: Color,
    },
    /// Remove an opposing piece after forming a mill.
    Capture { target: Position, player: Color },
}

impl Move {
    /// Create a placement.
    #[must_use]
    pub const fn place(to: Position, player: Color) -> Self {
        Move::Place { to, player }
    }

    /// Create a step.
    #[must_use]
    pub const fn step(from: Position, to: Position, player: Color) -> Self {
        Move::Step { from, to, player }
    }

    /// Create a capture.
    #[must_use]
    pub const fn capture(target: Position, player: Color) -> Self {
        Move::Capture { target, player }
    }

    /// The color making the move.
    #[inline]
    #[must_use]
    pub const fn player(&self) -> Color {
        match *self {
            Move::Place { player, .. }
            | Move::Step { player, .. }
            | Move::Capture { player, .. } => player,
        }
    }

    /// Where the mover's piece ends up (`None` for captures).
    #[inline]
    #[must_use]
    pub const fn destination(&self) -> Option<Position> {
        match *self {
            Move::Place { to, .. } | Move::Step { to, .. } => Some(to),
            Move::Capture { .. } => None,
        }
    }

    /// Check whether this is a capture.
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Move::Capture { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { to, player } => write!(f, "{player} places at {to}"),
            Move::Step { from, to, player } => write!(f, "{player} moves {from} -> {to}"),
            Move::Capture { target, player } => write!(f, "{player} captures {target}"),
        }
    }
}

/// A move as it appears in a snapshot's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 0-based index of the move within the game.
    pub ply: u32,

    /// The move applied.
    pub mv: Move,

    /// For a mill-forming `Place`/`Step`: the point captured by the
    /// follow-up `Capture`, once it has been applied.
    pub captured: Option<Position>,
}

impl MoveRecord {
    /// Create a record with no capture attached.
    #[must_use]
    pub const fn new(ply: u32, mv: Move) -> Self {
        Self {
            ply,
            mv,
            captured: None,
        }
    }
}
