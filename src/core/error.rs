use thiserror::Error;

/// A text layout could not be turned into a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout has no rows")]
    Empty,
    #[error("Layout row {row} is empty")]
    EmptyRow { row: usize },
    #[error("Layout row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown layout symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

/// A game configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("Layout has no playable squares")]
    NoPlayableSquares,
}
