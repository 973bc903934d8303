//! # gamma
//!
//! A territory-claiming board game engine.
//!
//! Players claim free cells on a rectangular grid. A player's cells form
//! connected areas (4-connectivity) and nobody may own more than a fixed
//! number of disjoint areas at once. Once per game each player may make a
//! golden move: capture a single cell owned by someone else, provided the
//! capture does not split the victim past the area cap.
//!
//! ## Design Principles
//!
//! 1. **Incremental**: area counts are maintained with union-find over the
//!    grid. Moves never rescan the board; only a golden move rebuilds the
//!    one area it cuts.
//!
//! 2. **All or nothing**: an operation either applies completely or leaves
//!    the game untouched. A golden move that fails after its tentative
//!    capture is rolled back before returning.
//!
//! 3. **Explicit reasons**: every `bool` operation has a `try_` twin that
//!    says why a move was refused.
//!
//! ## Modules
//!
//! - `core`: player ids, coordinates, configuration, errors, RNG
//! - `board`: cell grid, union-find, traversal scratch space
//! - `stats`: per-player area, field and golden-move bookkeeping
//! - `game`: the engine, move legality, the golden move, invariant audit
//! - `render`: board text output and its inverse
//! - `batch`: line-oriented text protocol
//! - `playout`: seeded random self-play

pub mod batch;
pub mod board;
pub mod core;
pub mod game;
pub mod playout;
pub mod render;
pub mod stats;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{Coord, GameConfig, GameRng, GammaError, PlayerId, PlayerMap};

pub use crate::board::{Cell, Grid};

pub use crate::stats::{PlayerStats, StatsTracker};

pub use crate::game::{Gamma, InvariantViolation, Rejection};

pub use crate::batch::{Command, Reply, Session};

pub use crate::playout::{Playout, PlayoutConfig, PlayoutSummary};
