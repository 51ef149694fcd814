//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::board::Position;
use crate::core::{GameId, GameState};
use crate::eval::evaluate;
use crate::rules::{generate_legal_moves, validate_move};
use crate::search::{SearchConfig, Searcher};

use super::py_core::{color_name, parse_color, PyMove};

/// Python wrapper for a game in progress.
///
/// Holds the current snapshot; `apply` replaces it with the successor.
#[pyclass(name = "Game")]
pub struct PyGame {
    state: GameState,
}

#[pymethods]
impl PyGame {
    /// Start a new game.
    #[new]
    #[pyo3(signature = (id = 0))]
    fn new(id: u64) -> Self {
        Self {
            state: GameState::new(GameId::new(id)),
        }
    }

    /// Restore a game from `to_bytes` output.
    #[staticmethod]
    fn from_bytes(data: &[u8]) -> PyResult<Self> {
        GameState::from_bytes(data)
            .map(|state| Self { state })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Encode the current snapshot.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self
            .state
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Legal moves for the side to move.
    fn legal_moves(&self) -> Vec<PyMove> {
        generate_legal_moves(&self.state, self.state.active_player())
            .into_iter()
            .map(PyMove)
            .collect()
    }

    fn is_valid(&self, mv: &PyMove) -> bool {
        validate_move(&self.state, mv.0).is_ok()
    }

    /// Why `mv` would be rejected, or `None` if it is legal.
    fn reason(&self, mv: &PyMove) -> Option<String> {
        validate_move(&self.state, mv.0).err().map(|e| e.to_string())
    }

    /// Apply a move. Raises `ValueError` if it is not legal.
    fn apply(&mut self, mv: &PyMove) -> PyResult<()> {
        self.state = self
            .state
            .try_apply_move(mv.0)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(())
    }

    /// Search for the side to move.
    #[pyo3(signature = (depth = 4))]
    fn select_move(&self, depth: u8) -> PyResult<PyMove> {
        let color = self.state.active_player();
        if generate_legal_moves(&self.state, color).is_empty() {
            return Err(PyValueError::new_err("no legal moves to search"));
        }
        let mut searcher = Searcher::new(SearchConfig::new().with_max_depth(depth));
        Ok(PyMove(searcher.select_move(&self.state, color)))
    }

    /// Static score for `color`.
    fn evaluate(&self, color: &str) -> PyResult<i32> {
        Ok(evaluate(&self.state, parse_color(color)?))
    }

    fn remaining(&self, color: &str) -> PyResult<u8> {
        Ok(self.state.remaining(parse_color(color)?))
    }

    fn on_board(&self, color: &str) -> PyResult<u8> {
        Ok(self.state.on_board(parse_color(color)?))
    }

    #[getter]
    fn phase(&self) -> String {
        self.state.phase().to_string()
    }

    #[getter]
    fn active_player(&self) -> &'static str {
        color_name(self.state.active_player())
    }

    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.state.winner().map(color_name)
    }

    #[getter]
    fn finished(&self) -> bool {
        self.state.is_finished()
    }

    #[getter]
    fn pending_capture(&self) -> bool {
        self.state.pending_capture()
    }

    /// Occupant of each of the 24 points (`None` when empty).
    #[getter]
    fn occupancy(&self) -> Vec<Option<&'static str>> {
        Position::all()
            .map(|p| self.state.board().occupant(p).map(color_name))
            .collect()
    }

    #[getter]
    fn history_len(&self) -> usize {
        self.state.history().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(id={}, phase={}, active={}, ply={}, finished={})",
            self.state.id().0,
            self.state.phase(),
            color_name(self.state.active_player()),
            self.state.ply(),
            self.state.is_finished()
        )
    }
}
