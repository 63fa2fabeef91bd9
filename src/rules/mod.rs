//! Game rules.
//!
//! - `jump`: jump geometry, the per-peg jump scan, gesture outcomes and
//!   terminal-state reports
//! - `engine`: `GameEngine`, the owner of the live state
//! - `error`: why a jump was refused
//!
//! The board model in `core` never interprets the rules; everything that
//! decides legality lives here.

pub mod engine;
pub mod error;
pub mod jump;

pub use engine::GameEngine;
pub use error::IllegalMove;
pub use jump::{available_jumps, jumps_from, GestureOutcome, Jump, TerminalState};
