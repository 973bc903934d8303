//! Python bindings for the Gamma engine.
//!
//! # Quick Start
//!
//! ```python
//! import gamma
//!
//! game = gamma.Gamma(width=5, height=5, players=2, max_areas=2)
//! game.move(1, 0, 0)
//! game.golden_move(2, 0, 0)
//! print(game.board())
//!
//! summary = gamma.play_random(game, seed=42)
//! ```

use pyo3::prelude::*;

mod py_game;
mod py_playout;

pub use py_game::*;
pub use py_playout::*;

/// gamma: territory game engine with a once-per-game capture move.
#[pymodule]
fn gamma(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGamma>()?;
    m.add_class::<PyPlayoutSummary>()?;
    m.add_function(wrap_pyfunction!(play_random, m)?)?;

    Ok(())
}
