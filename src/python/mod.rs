//! Python bindings for the morris engine.
//!
//! # Quick Start
//!
//! ```python
//! import morris_engine as me
//!
//! game = me.Game(id=1)
//! game.apply(me.Move.place(4, "white"))
//! reply = game.select_move(depth=4)
//! game.apply(reply)
//! print(game.phase, game.active_player, game.occupancy)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// morris_engine: Nine Men's Morris rules and alpha-beta search.
#[pymodule]
fn morris_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMove>()?;
    m.add_class::<PyGame>()?;
    Ok(())
}
