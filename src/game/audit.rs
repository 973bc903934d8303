//! Full recomputation of the incremental bookkeeping.
//!
//! Slow, allocation-heavy and read-only. Meant for tests and for the
//! playout driver's debug checks, never for the move path.

use derive_more::{Display, Error};
use rustc_hash::FxHashSet;

use crate::core::{Coord, PlayerId, PlayerMap};

use super::Gamma;

/// A mismatch between the tracked statistics and the board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvariantViolation {
    #[display("player {player} has {actual} fields but {recorded} are recorded")]
    FieldCount {
        player: PlayerId,
        recorded: u64,
        actual: u64,
    },

    #[display("player {player} has {actual} areas but {recorded} are recorded")]
    AreaCount {
        player: PlayerId,
        recorded: u32,
        actual: u32,
    },

    /// Union-find disagrees with a flood fill.
    #[display("player {player} has {roots} set roots for {areas} areas")]
    RootCount { player: PlayerId, roots: u32, areas: u32 },

    #[display("player {player} owns {areas} areas, over the cap")]
    AreaCap { player: PlayerId, areas: u32 },

    #[display("{at} is owned by unknown player {owner}")]
    UnknownOwner { at: Coord, owner: PlayerId },

    /// A free cell that is not its own singleton set.
    #[display("free cell {at} still has set links")]
    DirtyFreeCell { at: Coord },
}

impl Gamma {
    /// Recompute every statistic from the board and compare.
    pub fn audit(&self) -> Result<(), InvariantViolation> {
        let players = self.config.players;
        let mut fields = PlayerMap::<u64>::with_default(players);
        let mut roots = PlayerMap::new(players, |_| FxHashSet::<Coord>::default());

        for (at, cell) in self.grid.cells() {
            let Some(owner) = cell.owner else {
                if cell.parent != at || cell.rank != 0 {
                    return Err(InvariantViolation::DirtyFreeCell { at });
                }
                continue;
            };
            let Some(count) = fields.get_mut(owner) else {
                return Err(InvariantViolation::UnknownOwner { at, owner });
            };
            *count += 1;
            roots[owner].insert(self.grid.root_of(at));
        }

        let areas = self.count_areas();

        for (player, stats) in self.stats.iter() {
            let actual = fields[player];
            if stats.fields != actual {
                return Err(InvariantViolation::FieldCount {
                    player,
                    recorded: stats.fields,
                    actual,
                });
            }

            let actual = areas[player];
            if stats.areas != actual {
                return Err(InvariantViolation::AreaCount {
                    player,
                    recorded: stats.areas,
                    actual,
                });
            }

            let root_count = roots[player].len() as u32;
            if root_count != actual {
                return Err(InvariantViolation::RootCount {
                    player,
                    roots: root_count,
                    areas: actual,
                });
            }

            if stats.areas > self.config.max_areas {
                return Err(InvariantViolation::AreaCap {
                    player,
                    areas: stats.areas,
                });
            }
        }

        Ok(())
    }

    /// Connected components per player, by flood fill that ignores the
    /// union-find links entirely.
    fn count_areas(&self) -> PlayerMap<u32> {
        let mut areas = PlayerMap::<u32>::with_default(self.config.players);
        let mut seen = vec![false; self.grid.len()];
        let mut stack = Vec::new();

        for (start, cell) in self.grid.cells() {
            let Some(owner) = cell.owner else { continue };
            if seen[self.grid.index(start)] {
                continue;
            }
            let Some(count) = areas.get_mut(owner) else { continue };
            *count += 1;

            seen[self.grid.index(start)] = true;
            stack.push(start);
            while let Some(at) = stack.pop() {
                for next in self.grid.owned_neighbors(at, owner) {
                    let index = self.grid.index(next);
                    if !seen[index] {
                        seen[index] = true;
                        stack.push(next);
                    }
                }
            }
        }

        areas
    }
}
