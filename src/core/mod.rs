//! Core value types: players, coordinates, configuration, errors, RNG.
//!
//! Everything here is plain data with no knowledge of the board rules.

pub mod config;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use coord::Coord;
pub use error::GammaError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
