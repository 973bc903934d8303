//! Board text rendering.
//!
//! The top row of the output is `y = height - 1`, so `(0, 0)` sits in the
//! bottom-left corner. Each cell is right-aligned in a fixed-width column:
//! a `.` for a free cell, the owner's id otherwise.
//!
//! ```
//! use gamma::Gamma;
//!
//! let mut game = Gamma::create(3, 2, 12, 2).unwrap();
//! game.make_move(1, 0, 0);
//! game.make_move(12, 2, 1);
//!
//! assert_eq!(game.render(), "  .  . 12\n  1  .  .\n");
//! ```

use std::fmt::Write;

use crate::board::Grid;
use crate::core::PlayerId;

/// Render `grid` with every cell padded to `cell_width` columns.
#[must_use]
pub fn render_board(grid: &Grid, cell_width: usize) -> String {
    let rows = grid.height() as usize;
    let mut out = String::with_capacity(rows * (grid.width() as usize * cell_width + 1));

    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let owner = grid.coord(x, y).and_then(|at| grid.owner(at));
            // Writing to a String cannot fail.
            let _ = match owner {
                Some(player) => write!(out, "{:>cell_width$}", player.get()),
                None => write!(out, "{:>cell_width$}", '.'),
            };
        }
        out.push('\n');
    }

    out
}

/// Column width for a board whose highest owner is `highest`.
///
/// Single-digit boards are printed without separators; wider ids get one
/// extra column so neighbouring numbers stay apart.
#[must_use]
pub fn cell_width(highest: Option<PlayerId>) -> usize {
    match highest.map(|player| digits(player.get())) {
        None | Some(1) => 1,
        Some(width) => width + 1,
    }
}

/// Column width that fits any id up to `players`, separator included.
#[must_use]
pub fn max_cell_width(players: u32) -> usize {
    digits(players) + 1
}

/// Parse rendered text back into owners, indexed `[y][x]`.
///
/// Returns `None` for malformed text or ragged rows.
#[must_use]
pub fn parse_board(text: &str) -> Option<Vec<Vec<Option<u32>>>> {
    let mut rows = Vec::new();

    for line in text.lines() {
        let row = if line.contains(' ') {
            line.split_whitespace().map(parse_cell).collect::<Option<Vec<_>>>()?
        } else {
            line.chars()
                .map(|ch| parse_cell(ch.encode_utf8(&mut [0; 4])))
                .collect::<Option<Vec<_>>>()?
        };
        rows.push(row);
    }

    if rows.windows(2).any(|pair| pair[0].len() != pair[1].len()) {
        return None;
    }

    rows.reverse();
    Some(rows)
}

fn parse_cell(token: &str) -> Option<Option<u32>> {
    match token {
        "." => Some(None),
        _ => token.parse().ok().filter(|&id| id > 0).map(Some),
    }
}

fn digits(mut n: u32) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
