//! Occupancy array over the static board graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::layout::{Mill, MILLS, MILLS_BY_POSITION};
use super::{Position, POSITION_COUNT};
use crate::core::Color;

/// Which color (if any) sits on each of the 24 points.
///
/// Copying a board copies 24 bytes; adjacency and mill data live in static
/// tables and are never duplicated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Color>; POSITION_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; POSITION_COUNT],
        }
    }

    /// Build a board from a raw occupancy array.
    #[must_use]
    pub const fn from_cells(cells: [Option<Color>; POSITION_COUNT]) -> Self {
        Self { cells }
    }

    /// Raw occupancy array, indexed by position.
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Option<Color>; POSITION_COUNT] {
        &self.cells
    }

    /// Color at a position, `None` if empty.
    #[inline]
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<Color> {
        self.cells[pos.index()]
    }

    /// Check if a position is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_none()
    }

    /// Neighbors of a position (2-4 entries, ascending).
    #[inline]
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> &'static [Position] {
        pos.neighbors()
    }

    /// A piece may be placed on any empty point.
    #[inline]
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position) -> bool {
        self.is_empty(pos)
    }

    /// Put a piece on a position, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, pos: Position, color: Color) {
        self.cells[pos.index()] = Some(color);
    }

    /// Clear a position.
    #[inline]
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Positions held by `color`, ascending.
    pub fn positions_of(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.occupant(pos) == Some(color))
    }

    /// Empty positions, ascending.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.is_empty(pos))
    }

    /// Count pieces of a color.
    #[must_use]
    pub fn count(&self, color: Color) -> u8 {
        self.cells.iter().filter(|&&c| c == Some(color)).count() as u8
    }

    /// Check whether every point of a line is held by `color`.
    #[inline]
    #[must_use]
    pub fn is_mill(&self, mill: &Mill, color: Color) -> bool {
        mill.iter().all(|&pos| self.occupant(pos) == Some(color))
    }

    /// All lines fully occupied by `color`, in catalogue order.
    #[must_use]
    pub fn mills_for(&self, color: Color) -> SmallVec<[Mill; 4]> {
        MILLS
            .iter()
            .filter(|mill| self.is_mill(mill, color))
            .copied()
            .collect()
    }

    /// Check whether `pos` belongs to at least one line fully held by `color`.
    ///
    /// Does not require `pos` itself to be occupied by `color` beforehand;
    /// a line containing `pos` can only be full if it is.
    #[must_use]
    pub fn is_part_of_mill(&self, pos: Position, color: Color) -> bool {
        MILLS_BY_POSITION[pos.index()]
            .iter()
            .any(|&m| self.is_mill(&MILLS[m], color))
    }

    /// Check whether a piece on `pos` could slide to an adjacent point.
    #[must_use]
    pub fn has_empty_neighbor(&self, pos: Position) -> bool {
        pos.neighbors().iter().any(|&n| self.is_empty(n))
    }
}
