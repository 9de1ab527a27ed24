//! Canonical keys for visited-state deduplication.

use colormerge_core::{Board, Position};
use smallvec::SmallVec;

/// Color-blind key of a board: its ball positions, sorted.
///
/// Two boards with the same occupied cells collapse to one key even when
/// the balls sitting on those cells differ. Targets are not part of the key
/// because they never change during a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey(SmallVec<[Position; 8]>);

impl StateKey {
    pub fn of(board: &Board) -> Self {
        let mut positions: SmallVec<[Position; 8]> = board.positions().collect();
        positions.sort_unstable();
        Self(positions)
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }
}
