//! Integration tests for the alpha-beta searcher and iterative deepening
//!
//! Checks pruning against plain minimax, pass and game-over handling, the
//! deadline contract and move selection from the opening.

mod common;

use common::*;
use othello_engine::{
    find_best_move, iterative_deepening, Action, AlphaBeta, Deadline, DiscCountEvaluator,
    Evaluator, MatrixEvaluator, Player, Position, SearchError,
};
use std::time::Duration;

fn fixtures() -> Vec<Position> {
    vec![
        START_WHITE.parse().unwrap(),
        Position::initial(),
        WHITE_MUST_PASS.parse().unwrap(),
        play_out(&[0, 1, 2, 3, 4, 5]),
        play_out(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3]),
        play_out(&[7; 18]),
        play_out(&[2, 7, 1, 8, 2, 8, 1, 8, 2, 8, 4, 5, 9, 0, 4, 5, 2, 3, 5, 3, 6]),
    ]
}

#[test]
fn test_alpha_beta_matches_minimax() {
    let evaluators: [Box<dyn Evaluator>; 2] = [Box::new(MatrixEvaluator), Box::new(DiscCountEvaluator)];

    for evaluator in evaluators {
        let name = evaluator.name().to_string();
        let mut searcher = AlphaBeta::new(evaluator);

        for pos in fixtures() {
            for depth in 1..=4 {
                let scored = searcher
                    .evaluate_to_depth(&pos, depth, &Deadline::never())
                    .unwrap();
                let (score, action) = minimax(&pos, depth, searcher.evaluator());

                assert_eq!(scored.score, score, "{name} depth {depth} on {pos}");
                assert_eq!(scored.action, action, "{name} depth {depth} on {pos}");
            }
        }
    }
}

#[test]
fn test_pruning_cuts_off_subtrees() {
    let pos = play_out(&[3, 1, 4, 1, 5, 9]);
    let mut searcher = AlphaBeta::new(Box::new(MatrixEvaluator));
    searcher
        .evaluate_to_depth(&pos, 4, &Deadline::never())
        .unwrap();

    let stats = searcher.stats();
    assert!(stats.cutoffs > 0, "{stats:?}");
}

#[test]
fn test_returned_move_is_legal_or_pass() {
    let mut searcher = AlphaBeta::new(Box::new(MatrixEvaluator));
    for pos in fixtures() {
        let moves = pos.get_moves();
        for depth in 1..=3 {
            searcher.set_search_depth(depth);
            let action = searcher.evaluate(&pos, &Deadline::never()).unwrap();
            if moves.is_empty() {
                assert_eq!(action, Action::Pass);
            } else {
                assert!(moves.contains(&action), "{action} not legal in {pos}");
            }
        }
    }
}

#[test]
fn test_terminal_position_scores_statically() {
    let lone: Position = LONE_DISC.parse().unwrap();
    let full = (0..64).fold(Position::empty(Player::Black), |pos, index| {
        let cell = if index % 3 == 0 {
            othello_engine::Cell::Black
        } else {
            othello_engine::Cell::White
        };
        pos.with_cell(index / 8, index % 8, cell)
    });

    let mut searcher = AlphaBeta::new(Box::new(MatrixEvaluator));
    for pos in [lone, full] {
        assert!(pos.is_terminal());
        for depth in [1, 2, 7] {
            let scored = searcher
                .evaluate_to_depth(&pos, depth, &Deadline::never())
                .unwrap();
            assert_eq!(scored.action, Action::Pass);
            assert_eq!(scored.score, MatrixEvaluator.evaluate(&pos));
        }
    }
}

#[test]
fn test_forced_pass_searches_opponent_reply() {
    let pos: Position = WHITE_MUST_PASS.parse().unwrap();
    assert!(pos.get_moves().is_empty());
    assert!(!pos.is_terminal());

    let mut searcher = AlphaBeta::new(Box::new(DiscCountEvaluator));

    // Depth 1: pass, then the leaf is scored with Black to move
    let shallow = searcher
        .evaluate_to_depth(&pos, 1, &Deadline::never())
        .unwrap();
    assert_eq!(shallow.action, Action::Pass);
    assert_eq!(shallow.score, 0);

    // Depth 2: Black's only reply (1,3) captures White's disc
    let deeper = searcher
        .evaluate_to_depth(&pos, 2, &Deadline::never())
        .unwrap();
    assert_eq!(deeper.action, Action::Pass);
    assert_eq!(deeper.score, -3);
    assert_eq!(searcher.stats().passes, 1);
}

#[test]
fn test_blocked_white_in_wide_centre_passes() {
    // White brackets the Black pair from both sides, so only Black can move
    let pos: Position = format!("W{}OXXO{}", "E".repeat(27), "E".repeat(33))
        .parse()
        .unwrap();
    assert!(pos.get_moves().is_empty());
    assert_eq!(
        pos.with_side_to_move(Player::Black).get_moves(),
        vec![Action::place(3, 2), Action::place(3, 7)]
    );

    let mut searcher = AlphaBeta::new(Box::new(DiscCountEvaluator));
    let scored = searcher
        .evaluate_to_depth(&pos, 2, &Deadline::never())
        .unwrap();
    assert_eq!(scored.action, Action::Pass);
    assert_eq!(scored.score, -3);

    let action = find_best_move(
        &mut AlphaBeta::new(Box::new(MatrixEvaluator)),
        &pos,
        &Deadline::after(Duration::from_millis(50)),
    );
    assert_eq!(action, Action::Pass);
}

#[test]
fn test_past_deadline_raises_before_any_move() {
    let mut searcher = AlphaBeta::new(Box::new(MatrixEvaluator));
    let deadline = Deadline::expired();

    for pos in fixtures() {
        for depth in [1, 3, 10] {
            assert_eq!(
                searcher.evaluate_to_depth(&pos, depth, &deadline),
                Err(SearchError::DeadlineExceeded { depth })
            );
        }
    }
}

#[test]
fn test_iterative_deepening_falls_back_to_pass() {
    let mut searcher = AlphaBeta::new(Box::new(MatrixEvaluator));
    let pos: Position = START_WHITE.parse().unwrap();

    let report = iterative_deepening(&mut searcher, &pos, &Deadline::expired(), 64);
    assert_eq!(report.action, Action::Pass);
    assert_eq!(report.completed_depth, 0);
}

#[test]
fn test_interrupted_depth_is_discarded() {
    let pos = play_out(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3]);
    assert!(pos.has_moves());
    let mut searcher = AlphaBeta::new(Box::new(MatrixEvaluator));

    let report = iterative_deepening(&mut searcher, &pos, &Deadline::after(Duration::from_millis(200)), 64);
    assert!(report.completed_depth >= 1);
    assert!(report.completed_depth < 64, "a midgame cannot be solved in 200ms");

    let fixed = searcher
        .evaluate_to_depth(&pos, report.completed_depth, &Deadline::never())
        .unwrap();
    assert_eq!(report.action, fixed.action);
    assert_eq!(report.score, Some(fixed.score));
}

#[test]
fn test_opening_tie_break_keeps_first_move() {
    // The four White openings are symmetric, so every depth ties and the
    // first enumerated move is kept
    let pos: Position = START_WHITE.parse().unwrap();
    let mut searcher = AlphaBeta::new(Box::new(MatrixEvaluator));

    for depth in 1..=5 {
        let scored = searcher
            .evaluate_to_depth(&pos, depth, &Deadline::never())
            .unwrap();
        assert_eq!(scored.action, Action::place(2, 4), "depth {depth}");
    }
}

#[test]
fn test_two_second_opening_search() {
    let pos: Position = START_WHITE.parse().unwrap();
    let mut searcher = AlphaBeta::new(Box::new(MatrixEvaluator));
    let report = iterative_deepening(&mut searcher, &pos, &Deadline::from_secs_f64(2.0), 64);

    let openings = [
        Action::place(2, 4),
        Action::place(3, 5),
        Action::place(4, 2),
        Action::place(5, 3),
    ];
    assert!(openings.contains(&report.action), "{}", report.action);
    assert!(report.completed_depth >= 1);
    assert!(report.score.is_some());
}
