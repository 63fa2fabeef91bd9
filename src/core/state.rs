//! Engine state: the board plus the player's current selection.
//!
//! This is the complete mutable state of a game. The engine owns the live
//! copy; snapshots own detached copies. Both are plain values, so a clone
//! is a full structural copy with no shared storage.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::position::Position;

/// Board and selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineState {
    /// The board.
    pub board: Board,

    /// Peg the player has picked up, if any.
    pub selection: Option<Position>,
}

impl EngineState {
    /// Fresh state on a copy of `layout` with nothing selected.
    #[must_use]
    pub fn new(layout: &Board) -> Self {
        Self {
            board: layout.clone(),
            selection: None,
        }
    }

    #[must_use]
    pub fn pegs_remaining(&self) -> usize {
        self.board.count_pegs()
    }

    #[must_use]
    pub fn is_selected(&self, pos: Position) -> bool {
        self.selection == Some(pos)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(&Board::english())
    }
}
