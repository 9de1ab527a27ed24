//! Board builders.

use colormerge_core::{Ball, Board, Color, Difficulty, Position};

/// Builds a board of edge `size` from `(position, target)` pairs.
///
/// Colors cycle through the palette; the difficulty is the one whose table
/// entry has this size, or medium.
pub fn board(size: usize, balls: &[((i32, i32), (i32, i32))]) -> Board {
    balls
        .iter()
        .fold(BoardBuilder::new(size), |b, &(pos, target)| b.ball(pos, target))
        .build()
}

/// Incremental board construction.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    size: usize,
    difficulty: Option<Difficulty>,
    balls: Vec<Ball>,
}

impl BoardBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            difficulty: None,
            balls: Vec::new(),
        }
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Adds a ball with the next palette color.
    pub fn ball(self, position: impl Into<Position>, target: impl Into<Position>) -> Self {
        let color = Color::cyclic(self.balls.len());
        self.colored(color, position, target)
    }

    pub fn colored(
        mut self,
        color: Color,
        position: impl Into<Position>,
        target: impl Into<Position>,
    ) -> Self {
        self.balls.push(Ball::new(color, position, target));
        self
    }

    pub fn build(self) -> Board {
        let difficulty = self.difficulty.unwrap_or_else(|| {
            Difficulty::ALL
                .into_iter()
                .find(|d| d.settings().size == self.size)
                .unwrap_or_default()
        });
        Board::new(self.size, difficulty, self.balls)
    }
}
