//! Move engine: shifts every ball of a board one cell in a direction.

use smallvec::SmallVec;

use crate::board::Board;
use crate::direction::Direction;

/// Indices of the balls that moved during one shift.
pub type MovedBalls = SmallVec<[usize; 8]>;

/// Result of [`apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after the shift.
    pub board: Board,
    /// Indices (declaration order) of balls whose position changed.
    pub moved: MovedBalls,
}

impl MoveOutcome {
    /// Whether at least one ball changed position.
    #[inline]
    pub fn any_moved(&self) -> bool {
        !self.moved.is_empty()
    }
}

/// Shifts the board one cell in `direction`.
///
/// Every unlocked ball is considered independently, in declaration order,
/// against the pre-move board:
///
/// 1. a candidate cell off the board leaves the ball in place;
/// 2. a candidate cell that is some ball's target is only accepted when every
///    unlocked ball's candidate is exactly its own target (docking);
/// 3. a candidate cell occupied on the pre-move board leaves the ball in place;
/// 4. otherwise the ball moves.
///
/// Locked balls never move. The input board is never modified.
///
/// # Examples
///
/// ```
/// use colormerge_core::{apply_move, Ball, Board, Color, Difficulty, Direction};
///
/// let board = Board::new(5, Difficulty::Easy, vec![
///     Ball::new(Color::Red, (0, 0), (0, 4)),
///     Ball::new(Color::Orange, (4, 4), (4, 0)),
/// ]);
///
/// let outcome = apply_move(&board, Direction::Right);
/// assert!(outcome.any_moved());
/// assert_eq!(outcome.board.balls()[0].position(), (0, 1).into());
/// // Ball 1 sits on the right edge and stays.
/// assert_eq!(outcome.board.balls()[1].position(), (4, 4).into());
/// ```
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let balls = board.balls();
    let docking = all_dock(board, direction);

    let mut moved = MovedBalls::new();
    let next = balls
        .iter()
        .enumerate()
        .map(|(index, ball)| {
            if ball.is_locked() {
                return *ball;
            }
            let candidate = ball.position().step(direction);
            if !board.contains(candidate) {
                return *ball;
            }
            if board.is_target(candidate) && !docking {
                return *ball;
            }
            if board.is_occupied(candidate) {
                return *ball;
            }
            moved.push(index);
            ball.moved_to(candidate)
        })
        .collect();

    MoveOutcome {
        board: board.with_balls(next),
        moved,
    }
}

/// Whether every unlocked ball would land exactly on its own target.
fn all_dock(board: &Board, direction: Direction) -> bool {
    let mut unlocked = board.balls().iter().filter(|b| !b.is_locked()).peekable();
    unlocked.peek().is_some()
        && unlocked.all(|b| b.position().step(direction) == b.target())
}
