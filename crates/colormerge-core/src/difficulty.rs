//! Difficulty levels and their board parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

/// Puzzle difficulty tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    VeryHard,
    Insane,
}

/// Board parameters derived from a [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultySettings {
    /// Board edge length (odd).
    pub size: usize,
    /// Number of balls placed on the board.
    pub ball_count: usize,
    /// Minimum Manhattan distance between a ball's start and its target.
    pub min_distance: u32,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
        Difficulty::Insane,
    ];

    /// Returns the fixed generation parameters for this difficulty.
    ///
    /// # Examples
    ///
    /// ```
    /// use colormerge_core::Difficulty;
    ///
    /// let settings = Difficulty::Hard.settings();
    /// assert_eq!(settings.size, 9);
    /// assert_eq!(settings.ball_count, 4);
    /// assert_eq!(settings.min_distance, 4);
    /// ```
    pub const fn settings(self) -> DifficultySettings {
        let (size, ball_count, min_distance) = match self {
            Difficulty::Easy => (5, 2, 2),
            Difficulty::Medium => (7, 3, 3),
            Difficulty::Hard => (9, 4, 4),
            Difficulty::VeryHard => (11, 5, 5),
            Difficulty::Insane => (13, 6, 6),
        };
        DifficultySettings {
            size,
            ball_count,
            min_distance,
        }
    }

    /// Tag as used in room settings and config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "veryhard",
            Difficulty::Insane => "insane",
        }
    }

    /// Parses a tag, falling back to [`Difficulty::Medium`] when it is not
    /// recognized.
    pub fn from_tag_or_default(tag: &str) -> Self {
        match tag.parse() {
            Ok(difficulty) => difficulty,
            Err(err) => {
                tracing::warn!(event = "difficulty_fallback", error = %err, fallback = "medium");
                Difficulty::default()
            }
        }
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| PuzzleError::InvalidDifficulty(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
