//! Game configuration.
//!
//! A game is fully described by four numbers: board width and height,
//! the number of players, and the area cap (the maximum number of
//! disjoint areas a single player may own at once).

use serde::{Deserialize, Serialize};

use super::error::GammaError;

/// Complete game configuration.
///
/// All four parameters must be at least 1; [`GameConfig::validate`]
/// enforces this before a game is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of columns.
    pub width: u32,

    /// Number of rows.
    pub height: u32,

    /// Number of players. Valid player ids are `1..=players`.
    pub players: u32,

    /// Maximum number of disjoint areas per player.
    pub max_areas: u32,
}

impl GameConfig {
    /// Create a new game configuration.
    #[must_use]
    pub const fn new(width: u32, height: u32, players: u32, max_areas: u32) -> Self {
        Self {
            width,
            height,
            players,
            max_areas,
        }
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, players: u32) -> Self {
        self.players = players;
        self
    }

    /// Set the area cap.
    #[must_use]
    pub fn with_max_areas(mut self, max_areas: u32) -> Self {
        self.max_areas = max_areas;
        self
    }

    /// Check that every parameter is non-zero.
    pub fn validate(&self) -> Result<(), GammaError> {
        let params = [
            ("width", self.width),
            ("height", self.height),
            ("players", self.players),
            ("max_areas", self.max_areas),
        ];

        match params.iter().find(|(_, value)| *value == 0) {
            Some(&(name, _)) => Err(GammaError::ZeroParameter { name }),
            None => Ok(()),
        }
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn total_cells(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(10, 10, 2, 3)
    }
}
