//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Position;
use crate::core::{Color, Move};

/// Parse `"white"` / `"black"` (any case).
pub(crate) fn parse_color(name: &str) -> PyResult<Color> {
    match name.to_ascii_lowercase().as_str() {
        "white" => Ok(Color::White),
        "black" => Ok(Color::Black),
        _ => Err(PyValueError::new_err(format!("unknown color {name:?}"))),
    }
}

pub(crate) fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn position(index: usize) -> PyResult<Position> {
    Position::try_from(index).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python wrapper for Move.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Place a piece from hand on `to`.
    #[staticmethod]
    fn place(to: usize, player: &str) -> PyResult<Self> {
        Ok(Self(Move::place(position(to)?, parse_color(player)?)))
    }

    /// Move a piece from `source` to `to`.
    #[staticmethod]
    fn step(source: usize, to: usize, player: &str) -> PyResult<Self> {
        Ok(Self(Move::step(
            position(source)?,
            position(to)?,
            parse_color(player)?,
        )))
    }

    /// Capture the opposing piece on `target`.
    #[staticmethod]
    fn capture(target: usize, player: &str) -> PyResult<Self> {
        Ok(Self(Move::capture(position(target)?, parse_color(player)?)))
    }

    /// `"place"`, `"step"` or `"capture"`.
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            Move::Place { .. } => "place",
            Move::Step { .. } => "step",
            Move::Capture { .. } => "capture",
        }
    }

    #[getter]
    fn player(&self) -> &'static str {
        color_name(self.0.player())
    }

    /// Origin of a step; `None` otherwise.
    #[getter]
    fn source(&self) -> Option<usize> {
        match self.0 {
            Move::Step { from, .. } => Some(from.index()),
            _ => None,
        }
    }

    /// Destination of a place/step, or the captured point.
    #[getter]
    fn target(&self) -> usize {
        match self.0 {
            Move::Place { to, .. } | Move::Step { to, .. } => to.index(),
            Move::Capture { target, .. } => target.index(),
        }
    }

    fn __repr__(&self) -> String {
        format!("Move({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
