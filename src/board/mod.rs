//! Board storage: the cell grid, union-find over cells, traversal scratch.
//!
//! Nothing here knows about area caps or statistics; the
//! [`game`](crate::game) module layers the rules on top.

mod dsu;
mod grid;
mod scratch;

pub use grid::{Cell, Grid, Neighbors};
pub use scratch::Scratch;
