//! Color Merge Core - board model and rules of the Color Merge puzzle
//!
//! This crate provides the pieces shared by the authoritative server, the
//! single-player client and the hint solver:
//! - Board data model (positions, colored balls, targets)
//! - Puzzle generation from the difficulty table
//! - The move engine, a pure function shifting every ball at once
//! - The goal checker and the final lock-in transition

pub mod board;
pub mod difficulty;
pub mod direction;
pub mod engine;
pub mod error;
pub mod generator;
pub mod goal;

pub use board::{Ball, Board, Color, Position};
pub use difficulty::{Difficulty, DifficultySettings};
pub use direction::Direction;
pub use engine::{apply_move, MoveOutcome, MovedBalls};
pub use error::PuzzleError;
pub use generator::{accepts_placement, PuzzleGenerator, MAX_PLACEMENT_ATTEMPTS};
pub use goal::{is_ready, submit};
