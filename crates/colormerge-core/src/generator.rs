//! Randomized puzzle generation.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::board::{Ball, Board, Color, Position};
use crate::difficulty::{Difficulty, DifficultySettings};

/// Sampling rounds per ball before its placement starts over.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Builds random puzzles from the difficulty table.
///
/// # Examples
///
/// ```
/// use colormerge_core::{Difficulty, PuzzleGenerator};
///
/// let mut generator = PuzzleGenerator::seeded(7);
/// let board = generator.generate(Difficulty::Medium);
///
/// assert_eq!(board.size(), 7);
/// assert_eq!(board.ball_count(), 3);
/// assert!(board.balls().iter().all(|b| b.distance_to_target() >= 3));
///
/// // Same seed, same puzzle.
/// assert_eq!(PuzzleGenerator::seeded(7).generate(Difficulty::Medium), board);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl PuzzleGenerator<ChaCha8Rng> {
    /// Creates a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a puzzle for `difficulty`.
    pub fn generate(&mut self, difficulty: Difficulty) -> Board {
        let settings = difficulty.settings();
        let mut used: HashSet<Position> = HashSet::with_capacity(settings.ball_count * 2);
        let mut balls = Vec::with_capacity(settings.ball_count);

        for index in 0..settings.ball_count {
            let (start, target) = loop {
                if let Some(pair) = self.place(&used, &settings) {
                    break pair;
                }
                debug!(
                    event = "generation_exhausted",
                    difficulty = %difficulty,
                    ball = index,
                    attempts = MAX_PLACEMENT_ATTEMPTS,
                );
            };
            used.insert(start);
            used.insert(target);
            balls.push(Ball::new(Color::cyclic(index), start, target));
        }

        Board::new(settings.size, difficulty, balls)
    }

    /// Generates a puzzle for a difficulty tag; unknown tags fall back to
    /// medium.
    pub fn generate_tagged(&mut self, tag: &str) -> Board {
        self.generate(Difficulty::from_tag_or_default(tag))
    }

    // One placement round: up to MAX_PLACEMENT_ATTEMPTS start/target samples.
    // Rejected samples are never reserved.
    fn place(
        &mut self,
        used: &HashSet<Position>,
        settings: &DifficultySettings,
    ) -> Option<(Position, Position)> {
        let size = settings.size as i32;
        let free: Vec<Position> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
            .filter(|p| !used.contains(p))
            .collect();
        if free.len() < 2 {
            return None;
        }

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let start = free[self.rng.random_range(0..free.len())];
            let mut target_index = self.rng.random_range(0..free.len() - 1);
            if free[target_index] == start {
                target_index = free.len() - 1;
            }
            let target = free[target_index];

            if accepts_placement(start, target, settings.min_distance) {
                return Some((start, target));
            }
        }
        None
    }
}

/// Whether a start/target pair satisfies the minimum separation.
#[inline]
pub fn accepts_placement(start: Position, target: Position, min_distance: u32) -> bool {
    start != target && start.distance(target) >= min_distance
}
