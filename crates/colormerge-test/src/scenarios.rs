//! Named boards for rule and solver tests.

use colormerge_core::{submit, Board, Difficulty, PuzzleGenerator};

use crate::builder::board;

/// Every ball one cell from its target.
pub fn ready() -> Board {
    board(5, &[((0, 0), (0, 1)), ((3, 3), (2, 3))])
}

/// Two balls one step left of their targets; moving right docks both.
pub fn docking() -> Board {
    board(5, &[((1, 1), (1, 2)), ((3, 1), (3, 2))])
}

/// Moving right would put ball 0 on its target while ball 1 is nowhere
/// near its own, so ball 0 must stay.
pub fn partial_docking() -> Board {
    board(5, &[((1, 1), (1, 2)), ((3, 0), (4, 4))])
}

/// A single ball two moves right of being ready.
pub fn two_moves_right() -> Board {
    board(5, &[((2, 0), (2, 3))])
}

/// [`ready`] after a successful submit: every ball locked.
pub fn locked() -> Option<Board> {
    submit(&ready()).ok()
}

/// Reproducible generated puzzles, one per seed.
pub fn generated(difficulty: Difficulty, seeds: impl IntoIterator<Item = u64>) -> Vec<Board> {
    seeds
        .into_iter()
        .map(|seed| PuzzleGenerator::seeded(seed).generate(difficulty))
        .collect()
}

/// Medium board of the size the generator would use.
pub fn medium() -> Board {
    board(
        Difficulty::Medium.settings().size,
        &[((0, 0), (3, 3)), ((6, 6), (2, 5)), ((5, 0), (0, 6))],
    )
}
