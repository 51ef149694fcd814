//! Piece colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of the game. `White` always moves first.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for the per-color
//! counters in a snapshot. Backed by an array so it stays `Copy` when `T` is.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in turn order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The side that moves first in a new game.
    pub const FIRST: Color = Color::White;

    /// Get the opposing color.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Get the 0-based slot index (White = 0, Black = 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Iterate over both colors in turn order.
    pub fn all() -> impl Iterator<Item = Color> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use morris_engine::core::{Color, ColorMap};
///
/// let mut remaining: ColorMap<u8> = ColorMap::with_value(9);
/// remaining[Color::White] -= 1;
///
/// assert_eq!(remaining[Color::White], 8);
/// assert_eq!(remaining[Color::Black], 9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::White), factory(Color::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a color's entry.
    #[inline]
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's entry.
    #[inline]
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Consume into a plain `[White, Black]` array.
    #[must_use]
    pub fn into_array(self) -> [T; 2] {
        self.data
    }

    /// Build from a plain `[White, Black]` array.
    #[must_use]
    pub fn from_array(data: [T; 2]) -> Self {
        Self { data }
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
