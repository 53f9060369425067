//! Alpha-beta search with iterative deepening
//!
//! This module implements the move search using:
//! - Depth-limited minimax with alpha-beta pruning, as explicit max/min recursion
//! - A wall-clock deadline polled at the top of every node
//! - Iterative deepening so an answer from the last completed depth is always ready
//!
//! A deadline hit surfaces as `SearchError::DeadlineExceeded` and is returned
//! through every pending frame with `?`; no partial score from the interrupted
//! depth is ever used.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta searcher
//! - `deadline` - Absolute time limit shared by one search round
//! - `iterative` - Iterative deepening driver
//! - `stats` - Node and cutoff counters

mod alphabeta;
mod deadline;
mod iterative;
mod stats;

pub use alphabeta::AlphaBeta;
pub use deadline::Deadline;
pub use iterative::{find_best_move, iterative_deepening, SearchReport};
pub use stats::SearchStats;
