//! Error types for the Othello engine
//!
//! Position errors cover malformed encodings and illegal move applications.
//! Search errors carry the deadline interruption, which is the routine way an
//! iterative-deepening round ends. Config errors cover search configuration.

use crate::types::Action;
use thiserror::Error;

/// Errors raised while parsing or mutating a position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Encoded position has the wrong number of characters
    #[error("position string must be length {expected} (got {found})")]
    InvalidLength { expected: usize, found: usize },

    /// First character is not a side-to-move marker
    #[error("position[0] must be 'W' or 'B' (player to move), got '{found}'")]
    InvalidSideToMove { found: char },

    /// A board character outside the cell alphabet
    #[error("board cells must be only 'E', 'O', or 'X' (got '{found}' at cell {index})")]
    InvalidCell { index: usize, found: char },

    /// Placement outside the 8x8 board
    #[error("square ({row},{col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// Placement on a cell that already holds a disc
    #[error("square {action} is already occupied")]
    Occupied { action: Action },

    /// Placement that flips no opposing disc
    #[error("illegal move {action}: no discs would be flipped")]
    IllegalMove { action: Action },

    /// Move notation that is neither `pass` nor `(row,col)`
    #[error("cannot parse move notation '{input}'")]
    InvalidAction { input: String },
}

/// Result type alias for position operations
pub type PositionResult<T> = Result<T, PositionError>;

/// Errors that abort a depth-limited search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Deadline observed at the top of a search node
    #[error("search deadline exceeded during depth {depth}")]
    DeadlineExceeded { depth: u32 },

    /// The searcher applied a move the position rejected
    #[error("searcher applied an illegal move: {0}")]
    IllegalMove(#[from] PositionError),
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors in search configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("max_depth must be between 1 and {max} (got {found})")]
    InvalidDepth { found: u32, max: u32 },

    #[error("unknown evaluator '{name}' (expected 'matrix' or 'discs')")]
    UnknownEvaluator { name: String },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
