//! Construction errors.
//!
//! Move legality is not an error: illegal moves are reported as
//! [`Rejection`](crate::game::Rejection) values and leave the game untouched.
//! `GammaError` covers the only fallible step, creating a game.

use derive_more::{Display, Error};

/// Failure to create a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GammaError {
    /// A configuration parameter was zero.
    #[display("{name} must be at least 1")]
    ZeroParameter {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// `width * height` does not fit in memory indices.
    #[display("board of {width}x{height} cells is too large")]
    BoardTooLarge { width: u32, height: u32 },

    /// The board storage could not be allocated.
    #[display("failed to allocate {cells} cells")]
    Allocation { cells: usize },
}
