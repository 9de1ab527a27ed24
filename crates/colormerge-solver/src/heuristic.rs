//! Board evaluation guiding the best-first search.
//!
//! Lower is better. The value is not admissible: bonuses for nearly aligned
//! balls can drive it negative, so the search is greedy rather than optimal.

use colormerge_core::{Ball, Board};

/// Points per unit of Manhattan distance.
pub const DISTANCE_WEIGHT: i64 = 10;
/// Bonus for a ball exactly one cell from its target.
pub const ADJACENT_BONUS: i64 = 50;
/// Bonus for a ball two cells from its target.
pub const NEAR_BONUS: i64 = 10;
/// Bonus for a ball sharing a row or column with its target.
pub const ALIGNED_BONUS: i64 = 5;
/// Penalty per interfering pair.
pub const INTERFERENCE_PENALTY: i64 = 8;

/// Estimates how far `board` is from goal-ready.
///
/// # Examples
///
/// ```
/// use colormerge_core::{Ball, Board, Color, Difficulty};
/// use colormerge_solver::heuristic;
///
/// let board = Board::new(5, Difficulty::Easy, vec![
///     Ball::new(Color::Red, (0, 0), (0, 3)),
/// ]);
/// // 3 cells away on the same row: 30 - 5
/// assert_eq!(heuristic(&board), 25);
/// ```
pub fn heuristic(board: &Board) -> i64 {
    let balls = board.balls();
    let mut score = 0;

    for ball in balls {
        let distance = i64::from(ball.distance_to_target());
        score += distance * DISTANCE_WEIGHT;
        match distance {
            1 => score -= ADJACENT_BONUS,
            2 => score -= NEAR_BONUS,
            _ => {}
        }
        if ball.position().shares_axis(ball.target()) {
            score -= ALIGNED_BONUS;
        }
    }

    for (i, blocker) in balls.iter().enumerate() {
        for mover in &balls[i + 1..] {
            if interferes(blocker, mover) {
                score += INTERFERENCE_PENALTY;
            }
        }
    }

    score
}

/// Whether `blocker` stands inside the rectangle spanned by `mover`'s
/// position and target, excluding `mover`'s own cell.
pub fn interferes(blocker: &Ball, mover: &Ball) -> bool {
    let p = blocker.position();
    let from = mover.position();
    let to = mover.target();

    let rows = from.row.min(to.row)..=from.row.max(to.row);
    let cols = from.col.min(to.col)..=from.col.max(to.col);

    rows.contains(&p.row) && cols.contains(&p.col) && p != from
}
