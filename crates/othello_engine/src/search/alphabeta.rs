//! Alpha-beta searcher
//!
//! Depth-limited minimax with alpha-beta pruning, written as two mutually
//! recursive node functions: `max_value` for White to move, `min_value` for
//! Black to move. Every node polls the deadline before doing any work.

use super::deadline::Deadline;
use super::stats::SearchStats;
use crate::constants::AB_INF;
use crate::error::{SearchError, SearchResult};
use crate::evaluation::Evaluator;
use crate::position::Position;
use crate::types::*;
use tracing::trace;

/// Score and chosen action of one search node
///
/// `action` is `None` only for depth-0 leaves. Interior nodes always take
/// their first child, so any score an evaluator returns can be chosen.
#[derive(Clone, Copy, Debug)]
struct NodeValue {
    score: Score,
    action: Option<Action>,
}

/// Alpha-beta searcher over a pluggable evaluator
///
/// Reconfigure with [`set_evaluator`](Self::set_evaluator) and
/// [`set_search_depth`](Self::set_search_depth) between searches only.
pub struct AlphaBeta {
    evaluator: Box<dyn Evaluator>,
    search_depth: u32,
    root_depth: u32,
    stats: SearchStats,
}

impl AlphaBeta {
    pub const DEFAULT_DEPTH: u32 = 1;

    pub fn new(evaluator: Box<dyn Evaluator>) -> Self {
        AlphaBeta::with_depth(evaluator, Self::DEFAULT_DEPTH)
    }

    pub fn with_depth(evaluator: Box<dyn Evaluator>, depth: u32) -> Self {
        AlphaBeta {
            evaluator,
            search_depth: depth,
            root_depth: depth,
            stats: SearchStats::default(),
        }
    }

    pub fn set_evaluator(&mut self, evaluator: Box<dyn Evaluator>) {
        self.evaluator = evaluator;
    }

    pub fn set_search_depth(&mut self, depth: u32) {
        self.search_depth = depth;
    }

    pub fn search_depth(&self) -> u32 {
        self.search_depth
    }

    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator.as_ref()
    }

    /// Counters from the most recent search call, complete or interrupted
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best action for the side to move at the configured depth
    ///
    /// # Errors
    ///
    /// Returns `SearchError::DeadlineExceeded` if `deadline` passes before the
    /// search completes.
    pub fn evaluate(&mut self, position: &Position, deadline: &Deadline) -> SearchResult<Action> {
        self.evaluate_to_depth(position, self.search_depth, deadline)
            .map(|scored| scored.action)
    }

    /// Best action and its minimax score, searching `depth` plies
    ///
    /// If the search yields no action the canonical pass is substituted.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::DeadlineExceeded` if `deadline` passes before the
    /// search completes.
    pub fn evaluate_to_depth(
        &mut self,
        position: &Position,
        depth: u32,
        deadline: &Deadline,
    ) -> SearchResult<Scored> {
        self.stats = SearchStats::default();
        self.root_depth = depth;

        let root = if position.side_to_move().is_maximizing() {
            self.max_value(position, depth, -AB_INF, AB_INF, deadline)?
        } else {
            self.min_value(position, depth, -AB_INF, AB_INF, deadline)?
        };

        trace!(
            depth,
            score = root.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "alpha-beta completed"
        );

        Ok(Scored {
            score: root.score,
            action: root.action.unwrap_or(Action::Pass),
        })
    }

    fn max_value(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: Score,
        beta: Score,
        deadline: &Deadline,
    ) -> SearchResult<NodeValue> {
        self.enter_node(deadline)?;
        if depth == 0 {
            return Ok(self.leaf(position, None));
        }

        let moves = position.get_moves();
        if moves.is_empty() {
            return self.forced_pass(position, depth, alpha, beta, deadline);
        }

        let mut best: Option<NodeValue> = None;
        for action in moves {
            let child = position.make_move(action)?;
            let reply = self.min_value(&child, depth - 1, alpha, beta, deadline)?;

            let current = match best {
                Some(current) if reply.score <= current.score => current,
                _ => NodeValue {
                    score: reply.score,
                    action: Some(action),
                },
            };
            best = Some(current);
            if current.score >= beta {
                self.stats.cutoffs += 1;
                return Ok(current);
            }
            alpha = alpha.max(current.score);
        }

        Ok(best.unwrap_or(NodeValue {
            score: -AB_INF,
            action: None,
        }))
    }

    fn min_value(
        &mut self,
        position: &Position,
        depth: u32,
        alpha: Score,
        mut beta: Score,
        deadline: &Deadline,
    ) -> SearchResult<NodeValue> {
        self.enter_node(deadline)?;
        if depth == 0 {
            return Ok(self.leaf(position, None));
        }

        let moves = position.get_moves();
        if moves.is_empty() {
            return self.forced_pass(position, depth, alpha, beta, deadline);
        }

        let mut best: Option<NodeValue> = None;
        for action in moves {
            let child = position.make_move(action)?;
            let reply = self.max_value(&child, depth - 1, alpha, beta, deadline)?;

            let current = match best {
                Some(current) if reply.score >= current.score => current,
                _ => NodeValue {
                    score: reply.score,
                    action: Some(action),
                },
            };
            best = Some(current);
            if current.score <= alpha {
                self.stats.cutoffs += 1;
                return Ok(current);
            }
            beta = beta.min(current.score);
        }

        Ok(best.unwrap_or(NodeValue {
            score: AB_INF,
            action: None,
        }))
    }

    /// Side to move has no placement: pass, or score statically on a double pass
    ///
    /// The child is searched as the opposite node type with the same window.
    fn forced_pass(
        &mut self,
        position: &Position,
        depth: u32,
        alpha: Score,
        beta: Score,
        deadline: &Deadline,
    ) -> SearchResult<NodeValue> {
        let passed = position.make_move(Action::Pass)?;
        if !passed.has_moves() {
            return Ok(self.leaf(position, Some(Action::Pass)));
        }

        self.stats.passes += 1;
        let reply = if passed.side_to_move().is_maximizing() {
            self.max_value(&passed, depth - 1, alpha, beta, deadline)?
        } else {
            self.min_value(&passed, depth - 1, alpha, beta, deadline)?
        };

        Ok(NodeValue {
            score: reply.score,
            action: Some(Action::Pass),
        })
    }

    #[inline]
    fn enter_node(&mut self, deadline: &Deadline) -> SearchResult<()> {
        if deadline.has_passed() {
            return Err(SearchError::DeadlineExceeded {
                depth: self.root_depth,
            });
        }
        self.stats.nodes += 1;
        Ok(())
    }

    #[inline]
    fn leaf(&mut self, position: &Position, action: Option<Action>) -> NodeValue {
        self.stats.leaf_evaluations += 1;
        NodeValue {
            score: self.evaluator.evaluate(position),
            action,
        }
    }
}
