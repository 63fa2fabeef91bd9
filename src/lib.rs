//! # peg-solitaire
//!
//! Game-state core for single-player peg solitaire on the 33-hole cross
//! board.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: every game is an explicitly constructed
//!    `GameEngine` (or `Session`) owned by whoever runs the UI loop.
//!
//! 2. **Copies, not aliases**: snapshots hold structural clones of the
//!    board and selection, and hand out fresh clones on restore.
//!
//! 3. **Refusals are values**: an illegal jump is an `IllegalMove` or a
//!    `GestureOutcome::NoAction`, never a panic.
//!
//! ## Modules
//!
//! - `core`: cells, positions, the board, engine state, configuration
//! - `rules`: jump rules, the game engine, terminal-state detection
//! - `history`: snapshots and the linear undo stack
//! - `session`: engine + history + clock, driven one click at a time
//!
//! ## Logging
//!
//! The crate emits `tracing` events and spans; install any subscriber to
//! see them.

pub mod core;
pub mod rules;
pub mod history;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, ConfigError, Direction, EngineState, GameConfig, LayoutError, Position,
    ENGLISH_LAYOUT,
};

pub use crate::rules::{GameEngine, GestureOutcome, IllegalMove, Jump, TerminalState};

pub use crate::history::{History, Snapshot};

pub use crate::session::{GameClock, Session};
