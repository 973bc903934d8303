//! The cell array and neighbor queries.
//!
//! Cells are stored in a single flat `Vec` indexed by `y * width + x`.
//! Each cell carries its owner plus the disjoint-set bookkeeping
//! (`parent`, `rank`) maintained by the union-find operations.

use smallvec::SmallVec;

use crate::core::{Coord, GammaError, PlayerId};

/// Up to four orthogonal neighbors of a cell.
pub type Neighbors = SmallVec<[Coord; 4]>;

/// A single board cell.
///
/// A free cell (`owner == None`) is always its own root with rank 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Owning player, `None` when free.
    pub owner: Option<PlayerId>,
    /// Disjoint-set parent. Equal to the cell's own coordinate for roots.
    pub parent: Coord,
    /// Disjoint-set rank (upper bound on tree height).
    pub rank: u32,
}

impl Cell {
    fn free(at: Coord) -> Self {
        Self {
            owner: None,
            parent: at,
            rank: 0,
        }
    }
}

/// Width x height board of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a board with every cell free.
    ///
    /// Reports allocation failure instead of aborting.
    pub fn new(width: u32, height: u32) -> Result<Self, GammaError> {
        let len = cell_count(width, height)?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GammaError::Allocation { cells: len })?;

        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::free(Coord::new(x, y)));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounds-checked coordinate construction.
    #[must_use]
    pub fn coord(&self, x: u32, y: u32) -> Option<Coord> {
        (x < self.width && y < self.height).then_some(Coord::new(x, y))
    }

    /// Flat index of an in-bounds coordinate.
    #[must_use]
    pub fn index(&self, at: Coord) -> usize {
        at.y as usize * self.width as usize + at.x as usize
    }

    #[must_use]
    pub fn cell(&self, at: Coord) -> &Cell {
        &self.cells[self.index(at)]
    }

    pub fn cell_mut(&mut self, at: Coord) -> &mut Cell {
        let index = self.index(at);
        &mut self.cells[index]
    }

    #[must_use]
    pub fn owner(&self, at: Coord) -> Option<PlayerId> {
        self.cell(at).owner
    }

    /// Iterate over every coordinate, row by row from `y = 0`.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Iterate over `(coordinate, cell)` pairs, row by row from `y = 0`.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.coords().zip(self.cells.iter())
    }

    /// In-bounds orthogonal neighbors, in west, east, south, north order.
    #[must_use]
    pub fn neighbors(&self, at: Coord) -> Neighbors {
        let mut out = Neighbors::new();
        if at.x > 0 {
            out.push(Coord::new(at.x - 1, at.y));
        }
        if at.x + 1 < self.width {
            out.push(Coord::new(at.x + 1, at.y));
        }
        if at.y > 0 {
            out.push(Coord::new(at.x, at.y - 1));
        }
        if at.y + 1 < self.height {
            out.push(Coord::new(at.x, at.y + 1));
        }
        out
    }

    /// Neighbors owned by `player`.
    #[must_use]
    pub fn owned_neighbors(&self, at: Coord, player: PlayerId) -> Neighbors {
        let mut out = self.neighbors(at);
        out.retain(|n| self.owner(*n) == Some(player));
        out
    }

    /// Whether any neighbor of `at` is owned by `player`.
    #[must_use]
    pub fn has_owned_neighbor(&self, at: Coord, player: PlayerId) -> bool {
        self.neighbors(at)
            .iter()
            .any(|n| self.owner(*n) == Some(player))
    }

    /// Give `at` to `player` as a fresh singleton set.
    pub fn occupy(&mut self, at: Coord, player: PlayerId) {
        *self.cell_mut(at) = Cell {
            owner: Some(player),
            parent: at,
            rank: 0,
        };
    }

    /// Free `at`, resetting it to its own root.
    pub fn vacate(&mut self, at: Coord) {
        *self.cell_mut(at) = Cell::free(at);
    }
}

fn cell_count(width: u32, height: u32) -> Result<usize, GammaError> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&len| len > 0)
        .ok_or(GammaError::BoardTooLarge { width, height })
}
