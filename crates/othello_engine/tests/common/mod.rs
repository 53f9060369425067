//! Shared fixtures for engine integration tests

#![allow(dead_code)]

use othello_engine::{Action, Evaluator, Position, Score};

/// Standard opening layout with White to move
pub const START_WHITE: &str =
    "WEEEEEEEEEEEEEEEEEEEEEEEEEEEOXEEEEEEXOEEEEEEEEEEEEEEEEEEEEEEEEEEE";

/// White has no move, Black can play (1,3)
pub const WHITE_MUST_PASS: &str =
    "WXOEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEE";

/// A lone White disc: neither side can ever move
pub const LONE_DISC: &str =
    "WOEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEE";

/// Walk from the opening, choosing `moves[choice % len]` at each ply and
/// passing when forced. Stops early once the game is over.
pub fn play_out(choices: &[usize]) -> Position {
    let mut pos = Position::initial();
    for &choice in choices {
        let moves = pos.get_moves();
        if moves.is_empty() {
            if pos.is_terminal() {
                break;
            }
            pos = pos.make_move(Action::Pass).unwrap();
            continue;
        }
        pos = pos.make_move(moves[choice % moves.len()]).unwrap();
    }
    pos
}

/// Plain minimax without pruning, with the same pass and tie-break rules
pub fn minimax(position: &Position, depth: u32, evaluator: &dyn Evaluator) -> (Score, Action) {
    if depth == 0 {
        return (evaluator.evaluate(position), Action::Pass);
    }

    let moves = position.get_moves();
    if moves.is_empty() {
        let passed = position.make_move(Action::Pass).unwrap();
        if passed.get_moves().is_empty() {
            return (evaluator.evaluate(position), Action::Pass);
        }
        let (score, _) = minimax(&passed, depth - 1, evaluator);
        return (score, Action::Pass);
    }

    let maximizing = position.side_to_move().is_maximizing();
    let mut best: Option<(Score, Action)> = None;
    for action in moves {
        let child = position.make_move(action).unwrap();
        let (score, _) = minimax(&child, depth - 1, evaluator);
        let better = match best {
            None => true,
            Some((best_score, _)) if maximizing => score > best_score,
            Some((best_score, _)) => score < best_score,
        };
        if better {
            best = Some((score, action));
        }
    }

    best.unwrap()
}
