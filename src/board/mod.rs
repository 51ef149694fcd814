//! Board representation for nine men's morris.
//!
//! Three concentric squares with eight points each, linked by four radial
//! spokes through the side midpoints:
//!
//! ```text
//! 0-----------1-----------2
//! |           |           |
//! |   3-------4-------5   |
//! |   |       |       |   |
//! |   |   6---7---8   |   |
//! |   |   |       |   |   |
//! 9---10--11      12--13--14
//! |   |   |       |   |   |
//! |   |   15--16--17  |   |
//! |   |       |       |   |
//! |   18------19------20  |
//! |           |           |
//! 21----------22----------23
//! ```
//!
//! The graph and the 16 mill lines are static tables (see [`layout`]);
//! only the occupancy array in [`Board`] changes during a game.

pub mod board;
pub mod layout;

pub use board::Board;
pub use layout::{Mill, ADJACENCY, MILLS, MILLS_BY_POSITION};

use serde::{Deserialize, Serialize};

use crate::error::PositionError;

/// Number of points on the board.
pub const POSITION_COUNT: usize = 24;

/// Number of three-in-a-row lines.
pub const MILL_COUNT: usize = 16;

/// A point on the board, 0-23.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Create a position from an index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 24`. Use `Position::try_from` for untrusted input.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        assert!(index < POSITION_COUNT, "position index out of range");
        Self(index as u8)
    }

    /// Get the raw index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 24 positions in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..POSITION_COUNT as u8).map(Position)
    }

    /// Adjacent positions, ascending.
    #[inline]
    #[must_use]
    pub fn neighbors(self) -> &'static [Position] {
        ADJACENCY[self.index()]
    }

    /// Check whether `other` is directly connected to this position.
    #[inline]
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.neighbors().contains(&other)
    }
}

impl TryFrom<usize> for Position {
    type Error = PositionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < POSITION_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(PositionError::OutOfRange(index))
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::try_from(index as usize)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> u8 {
        pos.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
