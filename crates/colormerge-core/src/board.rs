//! Board data model: positions, balls and the board itself.

use std::fmt;

use crate::difficulty::Difficulty;
use crate::direction::Direction;

/// A cell coordinate on the board.
///
/// Coordinates are signed so that a candidate cell one step outside the
/// board can be represented and rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The neighboring cell in `direction`, which may lie off the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position::new(self.row + dr, self.col + dc)
    }

    /// Whether `self` and `other` share a row or a column.
    #[inline]
    pub fn shares_axis(self, other: Position) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Ball color.
///
/// Colors are a matching mechanic only; two balls may share a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Red,
    Orange,
    Blue,
}

impl Color {
    /// The fixed palette, in assignment order.
    pub const PALETTE: [Color; 3] = [Color::Red, Color::Orange, Color::Blue];

    /// Palette color for the ball at `index` (cyclic).
    #[inline]
    pub fn cyclic(index: usize) -> Color {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Blue => "blue",
        }
    }

    /// Hex color used by renderers.
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#ff4757",
            Color::Orange => "#ffa502",
            Color::Blue => "#1e90ff",
        }
    }

    fn glyph(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A movable ball with its target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ball {
    color: Color,
    position: Position,
    target: Position,
    locked: bool,
}

impl Ball {
    /// Creates an unlocked ball.
    pub fn new(color: Color, position: impl Into<Position>, target: impl Into<Position>) -> Self {
        Self {
            color,
            position: position.into(),
            target: target.into(),
            locked: false,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn target(&self) -> Position {
        self.target
    }

    /// Whether this ball has been finalized onto its target by a submit.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Manhattan distance from the ball to its target.
    #[inline]
    pub fn distance_to_target(&self) -> u32 {
        self.position.distance(self.target)
    }

    /// Whether the ball stands exactly one cell away from its target.
    #[inline]
    pub fn is_adjacent_to_target(&self) -> bool {
        self.distance_to_target() == 1
    }

    pub(crate) fn moved_to(self, position: Position) -> Self {
        Self { position, ..self }
    }

    pub(crate) fn locked_on_target(self) -> Self {
        Self {
            position: self.target,
            locked: true,
            ..self
        }
    }
}

/// A puzzle board.
///
/// Boards are plain values: every operation that changes a board returns a
/// new one and leaves its input untouched.
///
/// Callers must only construct boards whose positions and targets lie inside
/// `[0, size)²` and whose ball positions are pairwise distinct; the engine
/// does not re-validate them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
    balls: Vec<Ball>,
    difficulty: Difficulty,
}

impl Board {
    /// Creates a board from its parts.
    pub fn new(size: usize, difficulty: Difficulty, balls: Vec<Ball>) -> Self {
        Self {
            size,
            balls,
            difficulty,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    #[inline]
    pub fn ball(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    #[inline]
    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(pos.row as i64)) && (0..size).contains(&(pos.col as i64))
    }

    /// Whether any ball currently stands on `pos`.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.balls.iter().any(|b| b.position == pos)
    }

    /// Whether `pos` is the target of any ball.
    pub fn is_target(&self, pos: Position) -> bool {
        self.balls.iter().any(|b| b.target == pos)
    }

    /// Whether every ball has been locked by a successful submit.
    pub fn is_locked(&self) -> bool {
        !self.balls.is_empty() && self.balls.iter().all(|b| b.locked)
    }

    /// Iterates ball positions in declaration order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.balls.iter().map(|b| b.position)
    }

    pub(crate) fn with_balls(&self, balls: Vec<Ball>) -> Self {
        Self {
            size: self.size,
            balls,
            difficulty: self.difficulty,
        }
    }
}

impl fmt::Display for Board {
    /// Renders the grid: upper-case letters are balls, lower-case letters are
    /// uncovered targets, `*` marks a locked ball.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size as i32 {
            let mut line = String::with_capacity(self.size * 2);
            for col in 0..self.size as i32 {
                let pos = Position::new(row, col);
                let glyph = if let Some(ball) = self.balls.iter().find(|b| b.position == pos) {
                    if ball.locked {
                        '*'
                    } else {
                        ball.color.glyph()
                    }
                } else if let Some(ball) = self.balls.iter().find(|b| b.target == pos) {
                    ball.color.glyph().to_ascii_lowercase()
                } else {
                    '.'
                };
                if col > 0 {
                    line.push(' ');
                }
                line.push(glyph);
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
