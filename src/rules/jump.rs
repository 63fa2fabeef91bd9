//! Jumps, gesture outcomes and terminal-state reports.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Direction, Position};

/// A single capture: the peg at `from` jumps over `over` into `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub from: Position,
    pub over: Position,
    pub to: Position,
    pub direction: Direction,
}

impl Jump {
    /// Geometry of a jump from `from` in `direction`.
    ///
    /// Returns `None` if the landing square would have a negative
    /// coordinate. Says nothing about legality.
    #[must_use]
    pub fn toward(from: Position, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.step();
        Some(Self {
            from,
            over: from.offset(d_row, d_col)?,
            to: from.offset(d_row * 2, d_col * 2)?,
            direction,
        })
    }

    /// Whether this jump can be played on `board` right now.
    #[must_use]
    pub fn is_available(&self, board: &Board) -> bool {
        board.get(self.from) == Some(Cell::Peg)
            && board.get(self.over) == Some(Cell::Peg)
            && board.get(self.to) == Some(Cell::Empty)
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} over {}", self.from, self.to, self.over)
    }
}

/// Legal jumps for the peg at `from`, at most one per direction.
#[must_use]
pub fn jumps_from(board: &Board, from: Position) -> SmallVec<[Jump; 4]> {
    Direction::ALL
        .iter()
        .filter_map(|&dir| Jump::toward(from, dir))
        .filter(|jump| jump.is_available(board))
        .collect()
}

/// Every legal jump on `board`, scanning pegs row by row.
#[must_use]
pub fn available_jumps(board: &Board) -> Vec<Jump> {
    board
        .pegs()
        .flat_map(|peg| jumps_from(board, peg))
        .collect()
}

/// How a single click on the board was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureOutcome {
    /// A peg was selected or deselected.
    Select,
    /// The selected peg jumped; selection is cleared.
    MoveSuccess,
    /// Nothing changed.
    NoAction,
}

/// Whether the game has ended, and how.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerminalState {
    /// No further play is possible (or needed).
    pub game_over: bool,
    /// Exactly one peg is left.
    pub is_win: bool,
    pub pegs_remaining: usize,
    /// Number of legal jumps on the board.
    pub available_moves: usize,
}

impl TerminalState {
    /// Derive the report from raw counts.
    #[must_use]
    pub fn from_counts(pegs_remaining: usize, available_moves: usize) -> Self {
        let is_win = pegs_remaining == 1;
        Self {
            game_over: is_win || available_moves == 0,
            is_win,
            pegs_remaining,
            available_moves,
        }
    }

    /// Report for `board`.
    #[must_use]
    pub fn evaluate(board: &Board) -> Self {
        Self::from_counts(board.count_pegs(), available_jumps(board).len())
    }
}
