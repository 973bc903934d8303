//! Random playout bindings for Python.

use pyo3::prelude::*;

use crate::playout::{Playout, PlayoutConfig, PlayoutSummary};

use super::py_game::PyGamma;

/// Python wrapper for a playout summary.
#[pyclass(name = "PlayoutSummary")]
#[derive(Clone, Debug)]
pub struct PyPlayoutSummary(pub PlayoutSummary);

#[pymethods]
impl PyPlayoutSummary {
    #[getter]
    fn turns(&self) -> u32 {
        self.0.turns
    }

    #[getter]
    fn moves(&self) -> u64 {
        self.0.moves
    }

    #[getter]
    fn golden_moves(&self) -> u32 {
        self.0.golden_moves
    }

    #[getter]
    fn rejected_golden(&self) -> u32 {
        self.0.rejected_golden
    }

    #[getter]
    fn passes(&self) -> u32 {
        self.0.passes
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }
}

/// Play a game to the end with random moves.
#[pyfunction]
#[pyo3(signature = (game, seed = 42, golden_probability = 0.05, max_turns = 10_000))]
pub fn play_random(
    game: &mut PyGamma,
    seed: u64,
    golden_probability: f64,
    max_turns: u32,
) -> PyPlayoutSummary {
    let config = PlayoutConfig::default()
        .with_golden_probability(golden_probability)
        .with_max_turns(max_turns);
    PyPlayoutSummary(Playout::new(config, seed).play(&mut game.0))
}
