use thiserror::Error;

use crate::core::Position;

/// Why a requested jump was refused.
///
/// Refusals are an ordinary part of play, not faults: the board is left
/// untouched and the gesture layer reports them as `NoAction`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("{0} is not on the board")]
    OffGrid(Position),
    #[error("Cannot jump from {from} to {to}, a jump is exactly two squares along a row or column")]
    NotAJump { from: Position, to: Position },
    #[error("Cannot jump from {0}, there is no peg there")]
    OriginNotPeg(Position),
    #[error("Cannot land on {0}, it is not an empty hole")]
    DestinationNotEmpty(Position),
    #[error("Cannot jump over {0}, there is no peg there")]
    MidpointNotPeg(Position),
}
