//! Reusable traversal buffers.
//!
//! The visited bitmap and work stack are sized once per game and cleared
//! at the start of every traversal. They hold no state between calls.

use crate::core::{Coord, GammaError, PlayerId};

use super::grid::Grid;

/// Scratch space for flood fills over a single player's cells.
#[derive(Clone, Debug)]
pub struct Scratch {
    visited: Vec<bool>,
    stack: Vec<Coord>,
}

impl Scratch {
    /// Allocate buffers for a board of `cells` cells.
    pub fn new(cells: usize) -> Result<Self, GammaError> {
        let mut visited = Vec::new();
        visited
            .try_reserve_exact(cells)
            .map_err(|_| GammaError::Allocation { cells })?;
        visited.resize(cells, false);

        Ok(Self {
            visited,
            stack: Vec::new(),
        })
    }

    /// Visit every cell of `owner`'s area containing `seed`.
    ///
    /// `visit` receives the grid mutably but must not change ownership;
    /// the traversal reads owners to decide where to go next.
    pub fn flood<F>(&mut self, grid: &mut Grid, seed: Coord, owner: PlayerId, mut visit: F)
    where
        F: FnMut(&mut Grid, Coord),
    {
        self.visited.fill(false);
        self.stack.clear();

        self.visited[grid.index(seed)] = true;
        self.stack.push(seed);

        while let Some(current) = self.stack.pop() {
            visit(grid, current);

            for next in grid.owned_neighbors(current, owner) {
                let index = grid.index(next);
                if !self.visited[index] {
                    self.visited[index] = true;
                    self.stack.push(next);
                }
            }
        }
    }
}
