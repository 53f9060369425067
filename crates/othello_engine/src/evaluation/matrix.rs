//! Weight-matrix evaluation
//!
//! Sums the positional weight of every White disc, subtracts the weight of
//! every Black disc, then adds `MOBILITY_WEIGHT` per legal move White has over
//! Black. Mobility is counted for both sides regardless of who is to move.

use super::Evaluator;
use crate::constants::*;
use crate::position::Position;
use crate::types::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixEvaluator;

impl MatrixEvaluator {
    /// Positional term alone
    pub fn material(&self, position: &Position) -> Score {
        let mut score = 0;

        for (row, weights) in WEIGHT_MATRIX.iter().enumerate() {
            for (col, &weight) in weights.iter().enumerate() {
                match position.cell(row, col) {
                    Cell::White => score += weight,
                    Cell::Black => score -= weight,
                    Cell::Empty => {}
                }
            }
        }

        score
    }

    /// Mobility term alone
    pub fn mobility(&self, position: &Position) -> Score {
        let white_moves = position.mobility(Player::White) as Score;
        let black_moves = position.mobility(Player::Black) as Score;
        (white_moves - black_moves) * MOBILITY_WEIGHT
    }
}

impl Evaluator for MatrixEvaluator {
    fn evaluate(&self, position: &Position) -> Score {
        self.material(position) + self.mobility(position)
    }

    fn name(&self) -> &str {
        "matrix"
    }
}
