//! Othello (Reversi) engine
//!
//! Picks a move for the side to move under a wall-clock deadline using
//! iterative deepening over a depth-limited alpha-beta minimax search.
//!
//! ## Module Organization
//!
//! - `constants` - Board geometry, encoding alphabet, search bounds, weights
//! - `types` - Cells, players, actions and scored results
//! - `board` - Square indexing helpers
//! - `position` - Immutable position value, parsing and move application
//! - `move_gen` - Legal move generation and disc flipping
//! - `evaluation` - The `Evaluator` trait and the bundled heuristics
//! - `search` - Alpha-beta searcher, deadline and iterative deepening
//! - `config` - Search configuration
//! - `error` - Error types
//!
//! ```rust
//! use othello_engine::{find_best_move, AlphaBeta, Deadline, MatrixEvaluator, Position};
//! use std::time::Duration;
//!
//! let position: Position = "WEEEEEEEEEEEEEEEEEEEEEEEEEEEOXEEEEEEXOEEEEEEEEEEEEEEEEEEEEEEEEEEE"
//!     .parse()
//!     .unwrap();
//! let mut searcher = AlphaBeta::new(Box::new(MatrixEvaluator));
//! let action = find_best_move(&mut searcher, &position, &Deadline::after(Duration::from_millis(50)));
//! assert!(position.get_moves().contains(&action));
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod position;
pub mod search;
pub mod types;

pub use config::{EvaluatorKind, SearchConfig};
pub use error::{ConfigError, PositionError, PositionResult, SearchError, SearchResult};
pub use evaluation::{DiscCountEvaluator, Evaluator, MatrixEvaluator};
pub use position::Position;
pub use search::{find_best_move, iterative_deepening, AlphaBeta, Deadline, SearchReport, SearchStats};
pub use types::{Action, Cell, Player, Score, Scored};
