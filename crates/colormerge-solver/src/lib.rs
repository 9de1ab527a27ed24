//! Color Merge hint solver.
//!
//! Best-first A* search over the boards reachable through
//! [`colormerge_core::apply_move`], bounded by the depth, time and node
//! budgets of [`colormerge_config::SearchBudget`].
//!
//! - [`AStarSolver`] - the search, returning a move plan
//! - [`heuristic()`] - board evaluation guiding the search
//! - [`termination`] - composable stop conditions
//! - [`HintService`] - worker thread answering hint requests

pub mod explain;
pub mod frontier;
pub mod heuristic;
pub mod hint;
pub mod key;
pub mod node;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod termination;

pub use explain::{Confidence, Explanation, MoveDescriptor, MovedBall};
pub use heuristic::{heuristic, interferes};
pub use hint::{Dispatch, Hint, HintError, HintEvent, HintResponse, HintService, HintWorker};
pub use key::StateKey;
pub use solver::{AStarSolver, SolveOutcome, SolveResult};
pub use stats::SearchStats;
