//! Board coordinates.
//!
//! ## Position
//!
//! Zero-based `(row, col)` pair. Row 0 is the top of the board.
//!
//! ## Direction
//!
//! The four axis-aligned jump directions, kept as a fixed table rather
//! than anything dispatched at runtime.

use serde::{Deserialize, Serialize};

/// A square on the board, addressed by row and column.
///
/// Positions are not tied to a particular board: whether a position is
/// on the grid is answered by [`Board::contains`](crate::core::Board::contains).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed delta.
    ///
    /// Returns `None` if either coordinate would go negative. Overflowing the
    /// far edge of a board is not detected here.
    ///
    /// ```
    /// use peg_solitaire::core::Position;
    ///
    /// let p = Position::new(3, 1);
    /// assert_eq!(p.offset(0, 2), Some(Position::new(3, 3)));
    /// assert_eq!(p.offset(0, -2), None);
    /// ```
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Signed displacement from `self` to `other`.
    #[must_use]
    pub fn delta_to(self, other: Position) -> (isize, isize) {
        (
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        )
    }

    /// Square halfway between `self` and `other`.
    ///
    /// Only meaningful when both coordinate differences are even.
    #[must_use]
    pub const fn midpoint(self, other: Position) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four directions a peg can jump in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All jump directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(d_row, d_col)`. A jump covers two steps.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Direction of a two-square axis jump, if `(d_row, d_col)` is one.
    #[must_use]
    pub const fn from_jump_delta(d_row: isize, d_col: isize) -> Option<Self> {
        match (d_row, d_col) {
            (-2, 0) => Some(Direction::Up),
            (2, 0) => Some(Direction::Down),
            (0, -2) => Some(Direction::Left),
            (0, 2) => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let p = Position::new(2, 2);
        assert_eq!(p.offset(-2, 0), Some(Position::new(0, 2)));
        assert_eq!(p.offset(0, 3), Some(Position::new(2, 5)));
        assert_eq!(p.offset(-3, 0), None);
    }

    #[test]
    fn test_delta_and_midpoint() {
        let from = Position::new(3, 1);
        let to = Position::new(3, 3);
        assert_eq!(from.delta_to(to), (0, 2));
        assert_eq!(to.delta_to(from), (0, -2));
        assert_eq!(from.midpoint(to), Position::new(3, 2));
    }

    #[test]
    fn test_jump_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.step();
            assert_eq!(Direction::from_jump_delta(dr * 2, dc * 2), Some(dir));
        }
        assert_eq!(Direction::from_jump_delta(1, 0), None);
        assert_eq!(Direction::from_jump_delta(2, 2), None);
        assert_eq!(Direction::from_jump_delta(0, 4), None);
        assert_eq!(Direction::from_jump_delta(0, 0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(3, 1)), "(3, 1)");
    }
}
