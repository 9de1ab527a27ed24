//! Move descriptors and their human-readable explanations.

use std::fmt;

use colormerge_core::{Board, Color, Direction, MoveOutcome, Position};
use smallvec::SmallVec;

/// A ball that moved during one step of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovedBall {
    /// Index of the ball on the board.
    pub index: usize,
    pub color: Color,
    /// Cell before the move.
    pub from: Position,
    /// Cell after the move.
    pub position: Position,
    pub target: Position,
}

impl MovedBall {
    pub fn distance_to_target(&self) -> u32 {
        self.position.distance(self.target)
    }
}

/// Why a move is worth making, judged from the moved balls' new distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Explanation {
    /// Several balls moved and all of them ended next to their target.
    Perfect { count: usize },
    /// Some moved balls ended next to their target.
    Partial { count: usize },
    /// Some moved balls ended two cells from their target.
    Approaching { count: usize },
    /// Several balls moved without reaching either band.
    Closer { count: usize },
    /// A single ball moved without reaching either band.
    Single { color: Color },
    Idle,
}

impl Explanation {
    /// Classifies a step from the balls it moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use colormerge_core::{Color, Position};
    /// use colormerge_solver::{Explanation, MovedBall};
    ///
    /// let moved = [MovedBall {
    ///     index: 0,
    ///     color: Color::Blue,
    ///     from: Position::new(0, 0),
    ///     position: Position::new(0, 1),
    ///     target: Position::new(0, 2),
    /// }];
    /// let explanation = Explanation::classify(&moved);
    /// assert_eq!(explanation, Explanation::Partial { count: 1 });
    /// assert_eq!(explanation.to_string(), "1 ball reach target!");
    /// ```
    pub fn classify(moved: &[MovedBall]) -> Self {
        if moved.is_empty() {
            return Explanation::Idle;
        }

        let adjacent = moved.iter().filter(|b| b.distance_to_target() == 1).count();
        if adjacent == moved.len() && moved.len() > 1 {
            return Explanation::Perfect { count: adjacent };
        }
        if adjacent > 0 {
            return Explanation::Partial { count: adjacent };
        }

        let near = moved.iter().filter(|b| b.distance_to_target() == 2).count();
        if near > 0 {
            return Explanation::Approaching { count: near };
        }

        match moved {
            [only] => Explanation::Single { color: only.color },
            _ => Explanation::Closer { count: moved.len() },
        }
    }
}

fn balls(count: usize) -> &'static str {
    if count == 1 {
        "ball"
    } else {
        "balls"
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Explanation::Perfect { count } => {
                write!(f, "Perfect! All {count} balls reach target position")
            }
            Explanation::Partial { count } => write!(f, "{count} {} reach target!", balls(count)),
            Explanation::Approaching { count } => {
                write!(f, "{count} {} almost there (2 away)", balls(count))
            }
            Explanation::Closer { count } => write!(f, "Moving {count} balls closer to targets"),
            Explanation::Single { color } => write!(f, "Moving {color} ball toward target"),
            Explanation::Idle => f.write_str("No movement"),
        }
    }
}

/// One step of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub direction: Direction,
    /// Balls that actually moved, in board order.
    pub moved: SmallVec<[MovedBall; 8]>,
    pub explanation: Explanation,
    /// Depth at which this move was found (1 for the first move of a plan).
    pub step: usize,
}

impl MoveDescriptor {
    /// Describes the transition from `before` to `outcome.board`.
    pub fn new(direction: Direction, before: &Board, outcome: &MoveOutcome, step: usize) -> Self {
        let moved: SmallVec<[MovedBall; 8]> = outcome
            .moved
            .iter()
            .filter_map(|&index| {
                let old = before.ball(index)?;
                let new = outcome.board.ball(index)?;
                Some(MovedBall {
                    index,
                    color: new.color(),
                    from: old.position(),
                    position: new.position(),
                    target: new.target(),
                })
            })
            .collect();
        let explanation = Explanation::classify(&moved);

        Self {
            direction,
            moved,
            explanation,
            step,
        }
    }
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.direction.arrow(),
            self.direction.name(),
            self.explanation
        )
    }
}

/// How much to trust a hint, from the length of its plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    High,
    Medium,
    Complex,
}

impl Confidence {
    pub fn from_steps(total_steps: usize) -> Self {
        match total_steps {
            0..=6 => Confidence::High,
            7..=12 => Confidence::Medium,
            _ => Confidence::Complex,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Complex => "COMPLEX",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
