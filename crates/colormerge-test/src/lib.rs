//! Shared test fixtures for Color Merge crates.
//!
//! - [`builder`] - terse board construction from coordinate pairs
//! - [`scenarios`] - named boards exercising specific rules
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! colormerge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use colormerge_test::{board, scenarios};
//!
//! let b = board(5, &[((0, 0), (0, 2))]);
//! assert_eq!(b.ball_count(), 1);
//! assert!(colormerge_core::is_ready(&scenarios::ready()));
//! ```

pub mod builder;
pub mod scenarios;

pub use builder::{board, BoardBuilder};
