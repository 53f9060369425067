//! Iterative deepening search
//!
//! Runs the alpha-beta searcher at depth 1, 2, 3, ... against one fixed
//! deadline and keeps the move of the last depth that completed. An
//! interrupted depth is thrown away whole.

use super::alphabeta::AlphaBeta;
use super::deadline::Deadline;
use super::stats::SearchStats;
use crate::constants::MAX_DEPTH;
use crate::error::SearchError;
use crate::position::Position;
use crate::types::*;
use tracing::{debug, info, warn};

/// Outcome of an iterative-deepening run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Move of the deepest completed iteration, the pass if none completed
    pub action: Action,
    /// Deepest completed iteration, 0 if none completed
    pub completed_depth: u32,
    /// Minimax score of `action` at `completed_depth`
    pub score: Option<Score>,
    /// Counters summed over every iteration, including the interrupted one
    pub stats: SearchStats,
}

/// Iterative deepening search up to `max_depth` plies (clamped to 1..=64)
pub fn iterative_deepening(
    searcher: &mut AlphaBeta,
    position: &Position,
    deadline: &Deadline,
    max_depth: u32,
) -> SearchReport {
    let max_depth = max_depth.clamp(1, MAX_DEPTH);
    let mut report = SearchReport {
        action: Action::Pass,
        completed_depth: 0,
        score: None,
        stats: SearchStats::default(),
    };

    for depth in 1..=max_depth {
        searcher.set_search_depth(depth);
        let outcome = searcher.evaluate_to_depth(position, depth, deadline);
        report.stats.merge(searcher.stats());

        match outcome {
            Ok(scored) => {
                report.action = scored.action;
                report.score = Some(scored.score);
                report.completed_depth = depth;
                debug!(
                    depth,
                    action = %scored.action,
                    score = scored.score,
                    nodes = searcher.stats().nodes,
                    "depth completed"
                );
            }
            Err(SearchError::DeadlineExceeded { depth }) => {
                debug!(depth, "deadline reached, discarding interrupted depth");
                break;
            }
            Err(err) => {
                warn!(depth, error = %err, "search aborted");
                break;
            }
        }
    }

    if report.action.is_pass() && position.has_moves() {
        warn!("no depth completed before the deadline, passing with legal moves available");
    }

    info!(
        action = %report.action,
        depth = report.completed_depth,
        score = ?report.score,
        nodes = report.stats.nodes,
        "search finished"
    );

    report
}

/// Find best move for `position` before `deadline`
pub fn find_best_move(searcher: &mut AlphaBeta, position: &Position, deadline: &Deadline) -> Action {
    iterative_deepening(searcher, position, deadline, MAX_DEPTH).action
}
