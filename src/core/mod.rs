//! Core board model: cells, positions, the board, engine state, configuration.
//!
//! Everything here is plain data with structural queries. Game rules live in
//! `rules`; this module never decides whether a move is legal.

pub mod cell;
pub mod position;
pub mod board;
pub mod state;
pub mod config;
pub mod error;

pub use cell::Cell;
pub use position::{Direction, Position};
pub use board::{Board, ENGLISH_LAYOUT};
pub use state::EngineState;
pub use config::GameConfig;
pub use error::{ConfigError, LayoutError};
