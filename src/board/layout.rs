//! Static board geometry: adjacency lists and the mill catalogue.
//!
//! Both tables are indexed by position and never change. Neighbor lists are
//! sorted ascending so move generation order is stable.

use super::{Position, MILL_COUNT, POSITION_COUNT};

const fn p(index: usize) -> Position {
    Position::new(index)
}

/// Three positions forming a line.
pub type Mill = [Position; 3];

/// Neighbors of each position.
pub static ADJACENCY: [&[Position]; POSITION_COUNT] = [
    &[p(1), p(9)],
    &[p(0), p(2), p(4)],
    &[p(1), p(14)],
    &[p(4), p(10)],
    &[p(1), p(3), p(5), p(7)],
    &[p(4), p(13)],
    &[p(7), p(11)],
    &[p(4), p(6), p(8)],
    &[p(7), p(12)],
    &[p(0), p(10), p(21)],
    &[p(3), p(9), p(11), p(18)],
    &[p(6), p(10), p(15)],
    &[p(8), p(13), p(17)],
    &[p(5), p(12), p(14), p(20)],
    &[p(2), p(13), p(23)],
    &[p(11), p(16)],
    &[p(15), p(17), p(19)],
    &[p(12), p(16)],
    &[p(10), p(19)],
    &[p(16), p(18), p(20), p(22)],
    &[p(13), p(19)],
    &[p(9), p(22)],
    &[p(19), p(21), p(23)],
    &[p(14), p(22)],
];

/// All 16 lines: 12 square sides followed by the 4 radial spokes.
pub static MILLS: [Mill; MILL_COUNT] = [
    // outer square
    [p(0), p(1), p(2)],
    [p(2), p(14), p(23)],
    [p(21), p(22), p(23)],
    [p(0), p(9), p(21)],
    // middle square
    [p(3), p(4), p(5)],
    [p(5), p(13), p(20)],
    [p(18), p(19), p(20)],
    [p(3), p(10), p(18)],
    // inner square
    [p(6), p(7), p(8)],
    [p(8), p(12), p(17)],
    [p(15), p(16), p(17)],
    [p(6), p(11), p(15)],
    // spokes
    [p(1), p(4), p(7)],
    [p(12), p(13), p(14)],
    [p(16), p(19), p(22)],
    [p(9), p(10), p(11)],
];

/// Indices into [`MILLS`] of the two lines through each position.
pub static MILLS_BY_POSITION: [[usize; 2]; POSITION_COUNT] = [
    [0, 3],   // 0
    [0, 12],  // 1
    [0, 1],   // 2
    [4, 7],   // 3
    [4, 12],  // 4
    [4, 5],   // 5
    [8, 11],  // 6
    [8, 12],  // 7
    [8, 9],   // 8
    [3, 15],  // 9
    [7, 15],  // 10
    [11, 15], // 11
    [9, 13],  // 12
    [5, 13],  // 13
    [1, 13],  // 14
    [10, 11], // 15
    [10, 14], // 16
    [9, 10],  // 17
    [6, 7],   // 18
    [6, 14],  // 19
    [5, 6],   // 20
    [2, 3],   // 21
    [2, 14],  // 22
    [1, 2],   // 23
];
