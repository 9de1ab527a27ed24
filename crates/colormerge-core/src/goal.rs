//! Goal checker: readiness test and the final lock-in transition.

use crate::board::Board;
use crate::error::{PuzzleError, Result};

/// Whether every ball stands exactly one cell away from its target.
///
/// Balls sitting on their target (distance zero) do not count as ready.
pub fn is_ready(board: &Board) -> bool {
    board.balls().iter().all(|b| b.is_adjacent_to_target())
}

/// Locks every ball onto its target.
///
/// Fails with [`PuzzleError::NotReady`] unless [`is_ready`] holds; the input
/// board is never modified.
///
/// # Examples
///
/// ```
/// use colormerge_core::{submit, Ball, Board, Color, Difficulty};
///
/// let board = Board::new(5, Difficulty::Easy, vec![
///     Ball::new(Color::Red, (0, 3), (0, 4)),
///     Ball::new(Color::Orange, (3, 0), (4, 0)),
/// ]);
///
/// let solved = submit(&board).unwrap();
/// assert!(solved.is_locked());
/// assert!(solved.balls().iter().all(|b| b.position() == b.target()));
/// ```
pub fn submit(board: &Board) -> Result<Board> {
    if !is_ready(board) {
        let adjacent = board
            .balls()
            .iter()
            .filter(|b| b.is_adjacent_to_target())
            .count();
        return Err(PuzzleError::NotReady {
            adjacent,
            total: board.ball_count(),
        });
    }

    let locked = board.balls().iter().map(|b| b.locked_on_target()).collect();
    Ok(board.with_balls(locked))
}
