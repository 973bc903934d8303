//! Golden move: capture another player's cell.
//!
//! Union-find cannot delete, so the capture runs in three phases:
//!
//! 1. **Tear-down**: every cell of the victim's area containing the target
//!    becomes its own singleton set (ownership unchanged).
//! 2. **Capture and rebuild**: the target is released and each surviving
//!    fragment around it is re-linked from one of the target's neighbors.
//!    The victim's area count changes by `fragments - 1`.
//! 3. **Commit or roll back**: if the victim is now over the area cap, or
//!    the mover cannot claim the cell, the cell goes back to the victim
//!    through the ordinary claim path. Re-claiming merges exactly the
//!    fragments counted in phase 2, which restores the victim's counts.

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{Coord, PlayerId};

use super::rules::GoldenTarget;
use super::{Gamma, Rejection};

impl Gamma {
    /// Capture another player's cell, reporting why the move was refused.
    ///
    /// On `Err` the game is unchanged, including when the capture was
    /// tentatively applied and then rolled back.
    #[instrument(level = "debug", skip(self))]
    pub fn try_golden_move(&mut self, player: u32, x: u32, y: u32) -> Result<(), Rejection> {
        let GoldenTarget { actor, at, victim } = self
            .golden_target(player, x, y)
            .inspect_err(|reason| debug!(%reason, "golden move rejected"))?;

        let fragments = self.detach(at, victim);
        let victim_areas = self.stats.get(victim).map_or(0, |s| s.areas);

        let outcome = if victim_areas > self.config.max_areas {
            Err(Rejection::VictimAreaLimit {
                victim,
                areas: victim_areas,
            })
        } else {
            self.check_area_limit(actor, at)
        };

        if let Err(reason) = outcome {
            self.claim(victim, at);
            debug!(%victim, fragments, %reason, "golden move rolled back");
            return Err(reason);
        }

        self.claim(actor, at);
        self.stats.record_golden(actor);
        debug!(%actor, %victim, fragments, "golden move");
        Ok(())
    }

    /// Capture another player's cell, at most once per player per game.
    /// Returns `false`, changing nothing, if illegal.
    pub fn golden_move(&mut self, player: u32, x: u32, y: u32) -> bool {
        self.try_golden_move(player, x, y).is_ok()
    }

    /// Phases 1 and 2: take `at` away from `victim`, leaving it free,
    /// and return the number of fragments the victim's area split into.
    fn detach(&mut self, at: Coord, victim: PlayerId) -> u32 {
        self.scratch
            .flood(&mut self.grid, at, victim, |grid, cell| grid.reset_root(cell));

        self.grid.vacate(at);

        let mut roots: SmallVec<[Coord; 4]> = SmallVec::new();
        for seed in self.grid.owned_neighbors(at, victim) {
            // A neighbor reached by an earlier rebuild is already part of
            // a counted fragment.
            if roots.contains(&self.grid.find(seed)) {
                continue;
            }

            self.scratch.flood(&mut self.grid, seed, victim, |grid, cell| {
                grid.link(seed, cell);
            });
            roots.push(self.grid.find(seed));
        }

        let fragments = roots.len() as u32;
        self.stats.record_capture(victim, fragments);
        fragments
    }
}
