//! The game engine.
//!
//! `GameEngine` owns the live [`EngineState`] and is the only thing that
//! mutates it. Callers drive it with one gesture at a time; each gesture is
//! classified as exactly one [`GestureOutcome`]. There is no multi-gesture
//! move in progress beyond the held selection.
//!
//! ## Example
//!
//! ```
//! use peg_solitaire::core::{Board, Position};
//! use peg_solitaire::rules::{GameEngine, GestureOutcome};
//!
//! let mut engine = GameEngine::new(&Board::english());
//!
//! assert_eq!(engine.select_or_deselect(Position::new(3, 1)), GestureOutcome::Select);
//! assert_eq!(engine.select_or_deselect(Position::new(3, 3)), GestureOutcome::MoveSuccess);
//! assert_eq!(engine.board().count_pegs(), 31);
//! ```

use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use super::error::IllegalMove;
use super::jump::{self, GestureOutcome, Jump, TerminalState};
use crate::core::{Board, Cell, Direction, EngineState, Position};
use crate::history::Snapshot;

/// Sole owner and mutator of the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    state: EngineState,
}

impl GameEngine {
    /// Start a game on a copy of `layout`.
    #[must_use]
    pub fn new(layout: &Board) -> Self {
        Self {
            state: EngineState::new(layout),
        }
    }

    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.state.selection
    }

    /// Replace the state with a fresh copy of `layout` and clear the selection.
    #[instrument(skip_all, fields(rows = layout.rows(), cols = layout.cols()))]
    pub fn reset(&mut self, layout: &Board) {
        self.state = EngineState::new(layout);
        debug!(pegs = self.state.pegs_remaining(), "engine reset");
    }

    /// Handle a click on `pos`.
    ///
    /// - Peg: toggle the selection → `Select`.
    /// - Empty with a selection: try the jump → `MoveSuccess` or `NoAction`.
    /// - Anything else (inert square, empty without selection, off-grid):
    ///   `NoAction`.
    #[instrument(skip_all, fields(row = pos.row, col = pos.col))]
    pub fn select_or_deselect(&mut self, pos: Position) -> GestureOutcome {
        match self.state.board.get(pos) {
            Some(Cell::Peg) => {
                self.state.selection = if self.state.is_selected(pos) {
                    None
                } else {
                    Some(pos)
                };
                trace!(selection = ?self.state.selection, "selection changed");
                GestureOutcome::Select
            }
            Some(Cell::Empty) => {
                let Some(from) = self.state.selection else {
                    return GestureOutcome::NoAction;
                };
                match self.attempt_move(from, pos) {
                    Ok(_) => {
                        self.state.selection = None;
                        GestureOutcome::MoveSuccess
                    }
                    Err(_) => GestureOutcome::NoAction,
                }
            }
            Some(Cell::OutOfBoard) | None => GestureOutcome::NoAction,
        }
    }

    /// Check a jump from `from` to `to` without playing it.
    ///
    /// Checks, in order: both squares on the grid, a two-square axis jump,
    /// a peg at the origin, an empty hole at the destination, a peg in
    /// between.
    pub fn check_move(&self, from: Position, to: Position) -> Result<Jump, IllegalMove> {
        let board = &self.state.board;
        for pos in [from, to] {
            if !board.contains(pos) {
                return Err(IllegalMove::OffGrid(pos));
            }
        }

        let (d_row, d_col) = from.delta_to(to);
        let direction =
            Direction::from_jump_delta(d_row, d_col).ok_or(IllegalMove::NotAJump { from, to })?;

        if board.get(from) != Some(Cell::Peg) {
            return Err(IllegalMove::OriginNotPeg(from));
        }
        if board.get(to) != Some(Cell::Empty) {
            return Err(IllegalMove::DestinationNotEmpty(to));
        }
        let over = from.midpoint(to);
        if board.get(over) != Some(Cell::Peg) {
            return Err(IllegalMove::MidpointNotPeg(over));
        }

        Ok(Jump {
            from,
            over,
            to,
            direction,
        })
    }

    /// Play the jump from `from` to `to`.
    ///
    /// On success the origin and the jumped square become empty and the
    /// destination gets the peg. On failure the board is untouched. The
    /// selection is never changed here.
    #[instrument(skip_all, fields(%from, %to))]
    pub fn attempt_move(&mut self, from: Position, to: Position) -> Result<Jump, IllegalMove> {
        let jump = self.check_move(from, to).map_err(|err| {
            debug!(%err, "move rejected");
            err
        })?;

        let board = &mut self.state.board;
        board.set(jump.from, Cell::Empty);
        board.set(jump.over, Cell::Empty);
        board.set(jump.to, Cell::Peg);

        debug!(%jump, pegs = board.count_pegs(), "move played");
        Ok(jump)
    }

    /// Whether clicking `pos` now would play a jump (and so capture a peg).
    ///
    /// Lets an orchestrator snapshot the state before the capture happens.
    #[must_use]
    pub fn would_capture(&self, pos: Position) -> bool {
        match self.state.selection {
            Some(from) => self.board().get(pos) == Some(Cell::Empty)
                && self.check_move(from, pos).is_ok(),
            None => false,
        }
    }

    /// Legal jumps for the peg at `pos`.
    #[must_use]
    pub fn jumps_from(&self, pos: Position) -> SmallVec<[Jump; 4]> {
        jump::jumps_from(self.board(), pos)
    }

    /// Every legal jump on the board.
    #[must_use]
    pub fn available_jumps(&self) -> Vec<Jump> {
        jump::available_jumps(self.board())
    }

    /// Is the game over, and was it won?
    ///
    /// Won means exactly one peg is left. Over means won, or no peg has a
    /// legal jump. Pure query.
    #[must_use]
    pub fn evaluate_terminal_state(&self) -> TerminalState {
        TerminalState::evaluate(self.board())
    }

    /// Detached copy of the current state.
    #[must_use]
    pub fn capture_state(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Replace the live state with a copy of the snapshot's.
    #[instrument(skip_all, fields(label = snapshot.label()))]
    pub fn restore_state(&mut self, snapshot: &Snapshot) {
        self.state = snapshot.state();
        trace!(pegs = self.state.pegs_remaining(), "state restored");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(&Board::english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_initial_state() {
        let engine = GameEngine::default();

        assert_eq!(engine.board().count_pegs(), 32);
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn test_select_toggles() {
        let mut engine = GameEngine::default();

        assert_eq!(engine.select_or_deselect(pos(3, 1)), GestureOutcome::Select);
        assert_eq!(engine.selection(), Some(pos(3, 1)));

        assert_eq!(engine.select_or_deselect(pos(3, 1)), GestureOutcome::Select);
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn test_select_other_peg_moves_selection() {
        let mut engine = GameEngine::default();

        engine.select_or_deselect(pos(3, 1));
        assert_eq!(engine.select_or_deselect(pos(1, 3)), GestureOutcome::Select);
        assert_eq!(engine.selection(), Some(pos(1, 3)));
    }

    #[test]
    fn test_empty_without_selection() {
        let mut engine = GameEngine::default();
        assert_eq!(engine.select_or_deselect(pos(3, 3)), GestureOutcome::NoAction);
        assert_eq!(engine.board(), &Board::english());
    }

    #[test]
    fn test_inert_and_off_grid() {
        let mut engine = GameEngine::default();
        engine.select_or_deselect(pos(3, 1));

        assert_eq!(engine.select_or_deselect(pos(0, 0)), GestureOutcome::NoAction);
        assert_eq!(engine.select_or_deselect(pos(42, 3)), GestureOutcome::NoAction);
        assert_eq!(engine.selection(), Some(pos(3, 1)));
    }

    #[test]
    fn test_gesture_move() {
        let mut engine = GameEngine::default();

        engine.select_or_deselect(pos(3, 1));
        assert_eq!(engine.select_or_deselect(pos(3, 3)), GestureOutcome::MoveSuccess);

        assert_eq!(engine.board().get(pos(3, 1)), Some(Cell::Empty));
        assert_eq!(engine.board().get(pos(3, 2)), Some(Cell::Empty));
        assert_eq!(engine.board().get(pos(3, 3)), Some(Cell::Peg));
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn test_gesture_illegal_keeps_selection() {
        let mut engine = GameEngine::default();
        engine.select_or_deselect(pos(3, 1));
        engine.attempt_move(pos(1, 3), pos(3, 3)).unwrap();

        // (1,3) is now empty but diagonal from the selected peg.
        assert_eq!(engine.select_or_deselect(pos(1, 3)), GestureOutcome::NoAction);
        assert_eq!(engine.selection(), Some(pos(3, 1)));
    }

    #[test]
    fn test_attempt_move_errors() {
        let mut engine = GameEngine::default();
        let before = engine.board().clone();

        assert_eq!(
            engine.attempt_move(pos(3, 1), pos(2, 2)),
            Err(IllegalMove::NotAJump { from: pos(3, 1), to: pos(2, 2) })
        );
        assert_eq!(
            engine.attempt_move(pos(3, 3), pos(3, 5)),
            Err(IllegalMove::OriginNotPeg(pos(3, 3)))
        );
        assert_eq!(
            engine.attempt_move(pos(3, 0), pos(3, 2)),
            Err(IllegalMove::DestinationNotEmpty(pos(3, 2)))
        );
        assert_eq!(
            engine.attempt_move(pos(3, 5), pos(3, 9)),
            Err(IllegalMove::OffGrid(pos(3, 9)))
        );
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_attempt_move_empty_midpoint() {
        let mut engine = GameEngine::new(&"o..".parse().unwrap());
        assert_eq!(
            engine.attempt_move(pos(0, 0), pos(0, 2)),
            Err(IllegalMove::MidpointNotPeg(pos(0, 1)))
        );
    }

    #[test]
    fn test_attempt_move_keeps_selection() {
        let mut engine = GameEngine::default();
        engine.select_or_deselect(pos(1, 3));

        engine.attempt_move(pos(3, 1), pos(3, 3)).unwrap();
        assert_eq!(engine.selection(), Some(pos(1, 3)));
    }

    #[test]
    fn test_would_capture() {
        let mut engine = GameEngine::default();
        assert!(!engine.would_capture(pos(3, 3)));

        engine.select_or_deselect(pos(3, 1));
        assert!(engine.would_capture(pos(3, 3)));
        assert!(!engine.would_capture(pos(3, 1)));
        assert!(!engine.would_capture(pos(0, 0)));

        // Pure query.
        assert_eq!(engine.board().count_pegs(), 32);
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::default();
        engine.select_or_deselect(pos(3, 1));
        engine.select_or_deselect(pos(3, 3));
        engine.select_or_deselect(pos(1, 3));

        engine.reset(&Board::english());

        assert_eq!(engine.board(), &Board::english());
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn test_capture_restore() {
        let mut engine = GameEngine::default();
        engine.select_or_deselect(pos(3, 1));
        let snapshot = engine.capture_state();

        engine.select_or_deselect(pos(3, 3));
        assert_ne!(engine.state(), &snapshot.state());

        engine.restore_state(&snapshot);
        assert_eq!(engine.state(), &snapshot.state());
        assert_eq!(engine.selection(), Some(pos(3, 1)));
    }

    #[test]
    fn test_terminal_initial() {
        let engine = GameEngine::default();
        let terminal = engine.evaluate_terminal_state();

        assert_eq!(terminal.pegs_remaining, 32);
        assert_eq!(terminal.available_moves, 4);
        assert!(!terminal.game_over);
        assert!(!terminal.is_win);
    }
}
