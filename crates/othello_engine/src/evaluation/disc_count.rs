//! Disc-difference evaluation

use super::Evaluator;
use crate::position::Position;
use crate::types::Score;

/// White discs minus Black discs
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscCountEvaluator;

impl Evaluator for DiscCountEvaluator {
    fn evaluate(&self, position: &Position) -> Score {
        let (white, black) = position.disc_counts();
        white as Score - black as Score
    }

    fn name(&self) -> &str {
        "discs"
    }
}
