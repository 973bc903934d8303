//! The Gamma engine.
//!
//! `Gamma` owns the board, the per-player statistics and the traversal
//! scratch space. All mutation goes through its operations:
//!
//! - [`Gamma::make_move`]: claim a free cell
//! - [`Gamma::golden_move`]: capture another player's cell, once per game
//!
//! Every operation either applies completely or leaves the game untouched.
//!
//! ## Usage
//!
//! ```
//! use gamma::Gamma;
//!
//! let mut game = Gamma::create(2, 2, 2, 1).unwrap();
//!
//! assert!(game.make_move(1, 0, 0));
//! assert!(!game.make_move(1, 1, 1)); // diagonal, and player 1 is at the cap
//! assert!(game.make_move(2, 1, 0));
//!
//! assert_eq!(game.busy_fields(1), 1);
//! assert_eq!(game.free_fields(2), 1);
//! assert_eq!(game.render(), "..\n12\n");
//! ```

mod audit;
mod golden;
mod rules;

pub use audit::InvariantViolation;
pub use rules::Rejection;

use tracing::{debug, trace};

use crate::board::{Grid, Scratch};
use crate::core::{Coord, GameConfig, GammaError, PlayerId};
use crate::render;
use crate::stats::{PlayerStats, StatsTracker};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Gamma {
    config: GameConfig,
    grid: Grid,
    stats: StatsTracker,
    scratch: Scratch,
}

impl Gamma {
    /// Create an empty game.
    ///
    /// Fails if any parameter is zero or the board cannot be allocated.
    pub fn new(config: GameConfig) -> Result<Self, GammaError> {
        config.validate()?;

        let grid = Grid::new(config.width, config.height)?;
        let scratch = Scratch::new(grid.len())?;

        Ok(Self {
            config,
            grid,
            stats: StatsTracker::new(config.players),
            scratch,
        })
    }

    /// Shorthand for [`Gamma::new`] with positional parameters.
    pub fn create(width: u32, height: u32, players: u32, max_areas: u32) -> Result<Self, GammaError> {
        Self::new(GameConfig::new(width, height, players, max_areas))
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.config.height
    }

    #[must_use]
    pub fn player_count(&self) -> u32 {
        self.config.players
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Statistics for one player, `None` for an unknown player.
    #[must_use]
    pub fn stats(&self, player: u32) -> Option<&PlayerStats> {
        self.stats.get(self.player(player).ok()?)
    }

    /// Owner of the cell at `(x, y)`; `None` when free or out of bounds.
    #[must_use]
    pub fn owner(&self, x: u32, y: u32) -> Option<PlayerId> {
        self.grid.coord(x, y).and_then(|at| self.grid.owner(at))
    }

    // === Ordinary moves ===

    /// Claim a free cell, reporting why the move was refused.
    pub fn try_move(&mut self, player: u32, x: u32, y: u32) -> Result<(), Rejection> {
        let (player, at) = self
            .check_move(player, x, y)
            .inspect_err(|reason| debug!(%reason, "move rejected"))?;
        self.claim(player, at);
        trace!(%player, %at, "move");
        Ok(())
    }

    /// Claim a free cell. Returns `false`, changing nothing, if illegal.
    pub fn make_move(&mut self, player: u32, x: u32, y: u32) -> bool {
        self.try_move(player, x, y).is_ok()
    }

    /// The success path of an ordinary move: occupy `at` as a new area,
    /// then merge it with every adjacent area of the same player.
    fn claim(&mut self, player: PlayerId, at: Coord) {
        self.grid.occupy(at, player);
        self.stats.record_claim(player);

        for neighbor in self.grid.owned_neighbors(at, player) {
            self.union(at, neighbor, true);
        }
    }

    /// Join the sets of two cells owned by the same player. With
    /// `count_merge`, an actual merge removes one area from the owner.
    fn union(&mut self, a: Coord, b: Coord, count_merge: bool) {
        if !self.grid.link(a, b) || !count_merge {
            return;
        }
        if let Some(owner) = self.grid.owner(a) {
            self.stats.record_merge(owner);
        }
    }

    // === Queries ===

    /// Cells owned by `player`; 0 for an unknown player.
    #[must_use]
    pub fn busy_fields(&self, player: u32) -> u64 {
        self.stats(player).map_or(0, |s| s.fields)
    }

    /// Cells `player` could claim with an ordinary move right now.
    ///
    /// Below the area cap that is every free cell; at the cap only free
    /// cells touching one of the player's areas count.
    #[must_use]
    pub fn free_fields(&self, player: u32) -> u64 {
        let Ok(id) = self.player(player) else {
            return 0;
        };
        let areas = self.stats.get(id).map_or(0, |s| s.areas);

        if areas < self.config.max_areas {
            return self.config.total_cells() - self.stats.total_fields();
        }

        self.grid
            .cells()
            .filter(|(at, cell)| cell.owner.is_none() && self.grid.has_owned_neighbor(*at, id))
            .count() as u64
    }

    /// Whether `player` still has a golden move with something to take.
    #[must_use]
    pub fn golden_possible(&self, player: u32) -> bool {
        let Ok(id) = self.player(player) else {
            return false;
        };
        let used = self.stats.get(id).is_some_and(|s| s.golden_used);
        !used && self.stats.others_own_fields(id)
    }

    // === Rendering ===

    /// The board as text, sized for the highest id currently on it.
    #[must_use]
    pub fn render(&self) -> String {
        render::render_board(&self.grid, render::cell_width(self.stats.highest_owner()))
    }

    /// The board as text, sized for the highest possible id.
    #[must_use]
    pub fn render_max(&self) -> String {
        render::render_board(&self.grid, render::max_cell_width(self.config.players))
    }
}
