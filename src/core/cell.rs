//! Cell contents.
//!
//! Every in-bounds square of a board holds exactly one `Cell`. Squares
//! outside the playable cross are `OutOfBoard`: they exist in the grid so
//! the board stays rectangular, but no peg ever lands on or jumps over them.

use serde::{Deserialize, Serialize};

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Part of the grid but not of the playing area. Permanently inert.
    OutOfBoard,
    /// Playable hole with no peg in it.
    Empty,
    /// Playable hole holding a peg.
    Peg,
}

impl Cell {
    /// Whether a peg can ever occupy this square.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Cell::OutOfBoard)
    }

    #[must_use]
    pub const fn is_peg(self) -> bool {
        matches!(self, Cell::Peg)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Layout symbol used by the text format.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::OutOfBoard => 'x',
            Cell::Empty => '.',
            Cell::Peg => 'o',
        }
    }

    /// Parse a layout symbol.
    ///
    /// Accepts the canonical symbols plus a few common aliases
    /// (`-` and space for out-of-board, `*` for a peg).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' | 'X' | '-' | ' ' => Some(Cell::OutOfBoard),
            '.' => Some(Cell::Empty),
            'o' | 'O' | '*' => Some(Cell::Peg),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
