//! Best-first A* search over the move engine's transition graph.

use std::collections::HashSet;
use std::fmt;

use colormerge_config::SearchBudget;
use colormerge_core::{apply_move, is_ready, Board, Difficulty, Direction};
use tracing::{debug, info, trace};

use crate::explain::MoveDescriptor;
use crate::frontier::Frontier;
use crate::heuristic::heuristic;
use crate::key::StateKey;
use crate::node::{move_sequence, SearchNode};
use crate::scope::SearchScope;
use crate::stats::SearchStats;
use crate::termination::{
    ExternalTermination, NodeCountTermination, OrTermination, Termination, TimeTermination,
};

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A goal-ready board was dequeued; the plan is complete.
    Solved,
    /// The time budget ran out; the plan is the best partial one.
    TimeLimit,
    /// The node budget ran out; the plan is the best partial one.
    NodeLimit,
    /// Every reachable state within the depth limit was examined.
    FrontierExhausted,
    /// The external stop flag was raised.
    Cancelled,
}

impl SolveOutcome {
    pub fn is_solved(self) -> bool {
        self == SolveOutcome::Solved
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SolveOutcome::Solved => "solved",
            SolveOutcome::TimeLimit => "time_limit",
            SolveOutcome::NodeLimit => "node_limit",
            SolveOutcome::FrontierExhausted => "frontier_exhausted",
            SolveOutcome::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plan plus diagnostics of one solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Complete plan when `outcome` is `Solved`, otherwise the best partial
    /// plan found (possibly empty).
    pub moves: Vec<MoveDescriptor>,
    pub outcome: SolveOutcome,
    pub stats: SearchStats,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }

    /// First move of the plan, if any.
    pub fn first(&self) -> Option<&MoveDescriptor> {
        self.moves.first()
    }
}

/// A* solver bounded by depth, time and node budgets.
///
/// # Examples
///
/// ```
/// use colormerge_core::{Ball, Board, Color, Difficulty, Direction};
/// use colormerge_solver::AStarSolver;
///
/// let board = Board::new(5, Difficulty::Easy, vec![
///     Ball::new(Color::Red, (2, 0), (2, 3)),
/// ]);
///
/// let plan = AStarSolver::for_difficulty(Difficulty::Easy).solve(&board);
/// assert_eq!(plan.len(), 2);
/// assert!(plan.iter().all(|m| m.direction == Direction::Right));
/// ```
#[derive(Debug, Clone)]
pub struct AStarSolver {
    budget: SearchBudget,
    termination: BudgetTermination,
}

// Checked in this order; the first one that fires names the outcome.
type BudgetTermination =
    OrTermination<(TimeTermination, NodeCountTermination, Option<ExternalTermination>)>;

impl AStarSolver {
    pub fn new(budget: SearchBudget) -> Self {
        Self {
            budget,
            termination: OrTermination((
                TimeTermination::new(budget.time_limit()),
                NodeCountTermination::new(budget.max_nodes),
                None,
            )),
        }
    }

    /// Creates a solver with the built-in budget for `difficulty`.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(SearchBudget::for_difficulty(difficulty))
    }

    /// Adds an external stop condition checked after the budgets.
    pub fn with_external(mut self, external: ExternalTermination) -> Self {
        (self.termination.0).2 = Some(external);
        self
    }

    pub fn budget(&self) -> SearchBudget {
        self.budget
    }

    /// Returns the plan for `board`: complete if one was found, otherwise
    /// the best partial plan. Empty when no move helps.
    pub fn solve(&self, board: &Board) -> Vec<MoveDescriptor> {
        self.solve_with_result(board).moves
    }

    /// Runs the search and returns the plan with its outcome and statistics.
    pub fn solve_with_result(&self, board: &Board) -> SolveResult {
        let mut scope = SearchScope::new();

        info!(
            event = "solve_start",
            balls = board.ball_count(),
            size = board.size(),
            max_depth = self.budget.max_depth,
            max_time_ms = self.budget.max_time_ms,
            max_nodes = self.budget.max_nodes,
        );

        let root_h = heuristic(board);
        let mut arena = vec![SearchNode::root(board.clone(), root_h)];
        let mut visited: HashSet<StateKey> = HashSet::new();
        visited.insert(StateKey::of(board));
        let mut frontier = Frontier::new();
        frontier.push(0, root_h, 0);
        scope.stats_mut().observe_frontier(frontier.len());

        // (h, arena index) of the best dequeued node; first one wins ties.
        let mut best: Option<(i64, usize)> = None;

        let (outcome, end) = loop {
            if frontier.is_empty() {
                break (SolveOutcome::FrontierExhausted, best.map(|(_, i)| i));
            }
            if let Some(stop) = self.stop_reason(&scope) {
                debug!(
                    event = "budget_stop",
                    reason = %stop,
                    nodes = scope.nodes_expanded(),
                    elapsed_ms = scope.elapsed().as_millis() as u64,
                );
                break (stop, best.map(|(_, i)| i));
            }
            let Some(index) = frontier.pop() else {
                break (SolveOutcome::FrontierExhausted, best.map(|(_, i)| i));
            };
            scope.stats_mut().record_expansion();

            let (current, depth, h) = {
                let node = &arena[index];
                if is_ready(node.board()) {
                    break (SolveOutcome::Solved, Some(index));
                }
                (node.board().clone(), node.depth(), node.h())
            };

            if best.map_or(true, |(best_h, _)| h < best_h) {
                best = Some((h, index));
            }

            if depth >= self.budget.max_depth {
                scope.stats_mut().record_depth_cutoff();
                continue;
            }

            for direction in Direction::ALL {
                let outcome = apply_move(&current, direction);
                if !outcome.any_moved() {
                    continue;
                }
                if !visited.insert(StateKey::of(&outcome.board)) {
                    scope.stats_mut().record_duplicate();
                    continue;
                }

                let descriptor = MoveDescriptor::new(direction, &current, &outcome, depth + 1);
                let child_h = heuristic(&outcome.board);
                let child_index = arena.len();
                arena.push(SearchNode::child(index, outcome.board, child_h, descriptor));
                frontier.push(depth + 1, child_h, child_index);
                scope.stats_mut().record_generated();
            }
            scope.stats_mut().observe_frontier(frontier.len());

            trace!(
                event = "expand",
                node = index,
                depth,
                h,
                frontier = frontier.len(),
            );
        };

        let moves = end
            .map(|index| move_sequence(&arena, index))
            .unwrap_or_default();

        info!(
            event = "solve_end",
            outcome = %outcome,
            moves = moves.len(),
            nodes = scope.nodes_expanded(),
            nodes_per_second = scope.stats().nodes_per_second() as u64,
            duration_ms = scope.elapsed().as_millis() as u64,
        );

        SolveResult {
            moves,
            outcome,
            stats: scope.into_stats(),
        }
    }

    fn stop_reason(&self, scope: &SearchScope) -> Option<SolveOutcome> {
        if !self.termination.is_terminated(scope) {
            return None;
        }
        let (time, nodes, _) = &self.termination.0;
        Some(if time.is_terminated(scope) {
            SolveOutcome::TimeLimit
        } else if nodes.is_terminated(scope) {
            SolveOutcome::NodeLimit
        } else {
            SolveOutcome::Cancelled
        })
    }
}
