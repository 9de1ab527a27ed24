//! Color Merge - shift every ball at once until each one stands beside its
//! target, then lock them all in.
//!
//! # Example
//!
//! ```rust
//! use colormerge::prelude::*;
//!
//! let mut generator = PuzzleGenerator::seeded(11);
//! let board = generator.generate(Difficulty::Easy);
//!
//! let plan = AStarSolver::for_difficulty(board.difficulty()).solve(&board);
//! let end = plan
//!     .iter()
//!     .fold(board.clone(), |b, step| apply_move(&b, step.direction).board);
//! if is_ready(&end) {
//!     assert!(submit(&end).unwrap().is_locked());
//! }
//! ```

pub use colormerge_config as config;
pub use colormerge_core as core;
pub use colormerge_session as session;
pub use colormerge_solver as solver;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use colormerge_config::{GameConfig, SearchBudget};
    pub use colormerge_core::{
        apply_move, is_ready, submit, Ball, Board, Color, Difficulty, Direction, MoveOutcome,
        Position, PuzzleError, PuzzleGenerator,
    };
    pub use colormerge_session::{PlayerId, RaceSession, RoomId, RoomRegistry, SessionEvent};
    pub use colormerge_solver::{AStarSolver, Hint, HintResponse, HintService, MoveDescriptor};
}
