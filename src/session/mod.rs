//! Session orchestration for a front end.
//!
//! Ties one [`GameEngine`](crate::rules::GameEngine) to one
//! [`History`](crate::history::History) and a [`GameClock`]:
//! - snapshot before every capturing click
//! - stop the clock on game over, resume it if undo reopens the game
//! - new game / restart / stop

mod clock;
mod game;

pub use clock::{format_elapsed, GameClock};
pub use game::Session;
