//! The peg board.
//!
//! ## Shape
//!
//! A `Board` is a rectangular grid fixed at construction. Only cell values
//! change afterwards, so positions computed against one board stay valid for
//! every later state of it (and for snapshots taken from it).
//!
//! ## Text format
//!
//! Boards parse from and render to one line per row, one symbol per cell:
//! `x` out of board, `.` empty, `o` peg. The standard English cross:
//!
//! ```text
//! xxoooxx
//! xxoooxx
//! ooooooo
//! ooo.ooo
//! ooooooo
//! xxoooxx
//! xxoooxx
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::LayoutError;
use super::position::Position;

/// Rows of the standard 33-hole English board, centre hole empty.
pub const ENGLISH_LAYOUT: [&str; 7] = [
    "xxoooxx",
    "xxoooxx",
    "ooooooo",
    "ooo.ooo",
    "ooooooo",
    "xxoooxx",
    "xxoooxx",
];

/// Rectangular grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of the given shape with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, fill: Cell) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// The standard English cross with 32 pegs and an empty centre.
    #[must_use]
    pub fn english() -> Self {
        let cells = ENGLISH_LAYOUT
            .iter()
            .flat_map(|row| row.chars())
            .map(|symbol| Cell::from_symbol(symbol).unwrap_or(Cell::OutOfBoard))
            .collect();
        Self {
            rows: ENGLISH_LAYOUT.len(),
            cols: ENGLISH_LAYOUT[0].len(),
            cells,
        }
    }

    /// Parse a board from row strings.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let first = rows.first().ok_or(LayoutError::Empty)?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(LayoutError::EmptyRow { row: 0 });
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found == 0 {
                return Err(LayoutError::EmptyRow { row });
            }
            if found != cols {
                return Err(LayoutError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(LayoutError::UnknownSymbol { row, col, symbol })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `pos` lies inside the grid (playable or not).
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    /// Cell at `pos`, or `None` when `pos` is off the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Cell at signed coordinates.
    ///
    /// `None` is the off-grid sentinel: the coordinates fall outside the
    /// array. That is distinct from `Some(Cell::OutOfBoard)`, which is a
    /// real, inert square of the grid.
    ///
    /// ```
    /// use peg_solitaire::core::{Board, Cell};
    ///
    /// let board = Board::english();
    /// assert_eq!(board.cell_at(0, 0), Some(Cell::OutOfBoard));
    /// assert_eq!(board.cell_at(3, 3), Some(Cell::Empty));
    /// assert_eq!(board.cell_at(-1, 3), None);
    /// assert_eq!(board.cell_at(3, 7), None);
    /// ```
    #[must_use]
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(Position::new(row, col))
    }

    /// Overwrite the cell at `pos`.
    ///
    /// Returns the previous value, or `None` (and changes nothing) if `pos`
    /// is off the grid.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) -> Option<Cell> {
        let i = self.index(pos)?;
        Some(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Whether a peg could ever occupy `pos`.
    #[must_use]
    pub fn is_playable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_playable)
    }

    /// Number of pegs on the board.
    #[must_use]
    pub fn count_pegs(&self) -> usize {
        self.cells.iter().filter(|c| c.is_peg()).count()
    }

    /// Number of playable squares (pegs plus holes).
    #[must_use]
    pub fn count_playable(&self) -> usize {
        self.cells.iter().filter(|c| c.is_playable()).count()
    }

    /// Every grid position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Positions currently holding a peg, row by row.
    pub fn pegs(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&p| self.get(p) == Some(Cell::Peg))
    }

    /// Render as row strings in the text format.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    /// Parse one row per line. Leading and trailing blank lines are ignored
    /// so indented raw strings work; spaces inside a row are cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .skip_while(|l| l.trim().is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        Self::from_rows(&lines[..end])
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = LayoutError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_rows(rows.as_slice())
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
