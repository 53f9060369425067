//! Position evaluation
//!
//! The searcher scores leaves through the [`Evaluator`] trait. Any pure
//! function of the position satisfying it is interchangeable; scores are from
//! White's perspective (higher favours White).
//!
//! ## Module Organization
//!
//! - `matrix` - Weight table plus mobility heuristic
//! - `disc_count` - Plain disc difference

mod disc_count;
mod matrix;

pub use disc_count::DiscCountEvaluator;
pub use matrix::MatrixEvaluator;

use crate::position::Position;
use crate::types::Score;

/// Static position scorer
///
/// Implementations must be pure: the same position always yields the same
/// score, with no per-call state. Alpha-beta pruning compares scores across
/// branches and iterations and relies on that stability.
pub trait Evaluator: Send + Sync {
    /// Score `position`, positive favouring White
    fn evaluate(&self, position: &Position) -> Score;

    /// Short name for logs
    fn name(&self) -> &str;
}
