//! Error types for the tictac-search crate

use thiserror::Error;

/// Main error type for the tictac-search crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("cell ({row}, {col}) is out of bounds for a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("board must be square: got {rows} rows with a {cols}-cell row")]
    NonSquareBoard { rows: usize, cols: usize },

    #[error("board string has {got} cells in '{context}', which is not a perfect square")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("game already over")]
    GameOver,

    #[error("agent '{agent}' chose illegal move ({row}, {col})")]
    IllegalAgentMove {
        agent: String,
        row: usize,
        col: usize,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
