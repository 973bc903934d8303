//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::game::Gamma;

/// Python wrapper for a game.
#[pyclass(name = "Gamma")]
#[derive(Clone)]
pub struct PyGamma(pub Gamma);

#[pymethods]
impl PyGamma {
    /// Create a new game.
    ///
    /// Raises ValueError if any parameter is zero or the board is too large.
    #[new]
    #[pyo3(signature = (width = 10, height = 10, players = 2, max_areas = 3))]
    fn new(width: u32, height: u32, players: u32, max_areas: u32) -> PyResult<Self> {
        Gamma::new(GameConfig::new(width, height, players, max_areas))
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn width(&self) -> u32 {
        self.0.width()
    }

    #[getter]
    fn height(&self) -> u32 {
        self.0.height()
    }

    #[getter]
    fn players(&self) -> u32 {
        self.0.player_count()
    }

    /// Claim a free cell. Returns False if the move is illegal.
    #[pyo3(name = "move")]
    fn make_move(&mut self, player: u32, x: u32, y: u32) -> bool {
        self.0.make_move(player, x, y)
    }

    /// Capture another player's cell. Returns False if the move is illegal.
    fn golden_move(&mut self, player: u32, x: u32, y: u32) -> bool {
        self.0.golden_move(player, x, y)
    }

    /// Explain why a move would be refused, or None if it is legal.
    fn why_not(&self, player: u32, x: u32, y: u32) -> Option<String> {
        self.0.check_move(player, x, y).err().map(|r| r.to_string())
    }

    fn busy_fields(&self, player: u32) -> u64 {
        self.0.busy_fields(player)
    }

    fn free_fields(&self, player: u32) -> u64 {
        self.0.free_fields(player)
    }

    fn golden_possible(&self, player: u32) -> bool {
        self.0.golden_possible(player)
    }

    /// Owner of a cell, or None if free or out of bounds.
    fn owner(&self, x: u32, y: u32) -> Option<u32> {
        self.0.owner(x, y).map(|p| p.get())
    }

    /// Legal ordinary moves for a player as (x, y) pairs.
    fn legal_moves(&self, player: u32) -> Vec<(u32, u32)> {
        self.0
            .legal_moves(player)
            .into_iter()
            .map(|at| (at.x, at.y))
            .collect()
    }

    /// The board as text.
    fn board(&self) -> String {
        self.0.render()
    }

    /// Copy the game for simulation.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.0.render()
    }

    fn __repr__(&self) -> String {
        format!(
            "Gamma(width={}, height={}, players={}, max_areas={})",
            self.0.width(),
            self.0.height(),
            self.0.player_count(),
            self.0.config().max_areas
        )
    }
}
