//! Error types for Color Merge puzzle operations

use thiserror::Error;

/// Main error type for puzzle operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Difficulty tag outside the fixed enumeration
    #[error("Invalid difficulty: {0:?}")]
    InvalidDifficulty(String),

    /// Submission attempted before every ball stands next to its target
    #[error("Not ready: {adjacent} of {total} balls are adjacent to their targets")]
    NotReady { adjacent: usize, total: usize },
}

/// Result type alias for puzzle operations
pub type Result<T> = std::result::Result<T, PuzzleError>;
