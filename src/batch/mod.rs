//! Batch mode: a line-oriented text protocol over the engine.
//!
//! ```text
//! B 3 3 2 2      start a 3x3 game, 2 players, at most 2 areas each
//! m 1 0 0        move: prints 1 or 0
//! g 2 0 0        golden move: prints 1 or 0
//! b 1            busy fields
//! f 1            free fields
//! q 1            golden move possible: prints 1 or 0
//! p              print the board
//! ```
//!
//! Lines starting with `#` and empty lines are skipped. Anything malformed
//! prints `ERROR <line>` to the error stream and changes nothing.

mod command;
mod session;

pub use command::{Command, ParseError};
pub use session::{Reply, Session};
