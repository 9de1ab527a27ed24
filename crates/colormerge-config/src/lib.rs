//! Configuration system for Color Merge.
//!
//! Load game and hint-solver configuration from TOML or YAML files to tune
//! room limits, scoring and search budgets without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use colormerge_config::GameConfig;
//! use colormerge_core::Difficulty;
//! use std::time::Duration;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     [game]
//!     max_players = 6
//!     default_difficulty = "hard"
//!
//!     [budgets.insane]
//!     max_depth = 40
//!     max_time_ms = 8000
//!     max_nodes = 50000
//! "#).unwrap();
//!
//! assert_eq!(config.game.max_players, 6);
//! assert_eq!(config.game.default_difficulty, Difficulty::Hard);
//! assert_eq!(config.budget_for(Difficulty::Insane).time_limit(), Duration::from_secs(8));
//! // Difficulties without an override keep the built-in budget.
//! assert_eq!(config.budget_for(Difficulty::Easy).max_depth, 25);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use colormerge_config::GameConfig;
//!
//! let config = GameConfig::load("colormerge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use colormerge_core::Difficulty;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GameConfig {
    /// Random seed for reproducible puzzles.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Room and scoring settings.
    #[serde(default)]
    pub game: GameSettings,

    /// Per-difficulty overrides of the hint solver budget.
    #[serde(default)]
    pub budgets: BudgetOverrides,
}

impl GameConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks limits that would make rooms unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let game = &self.game;
        if game.max_players == 0 {
            return Err(ConfigError::Invalid("max_players must be at least 1".into()));
        }
        if game.room_code_length == 0 {
            return Err(ConfigError::Invalid(
                "room_code_length must be at least 1".into(),
            ));
        }
        if game.min_ready_players > game.max_players {
            return Err(ConfigError::Invalid(format!(
                "min_ready_players ({}) exceeds max_players ({})",
                game.min_ready_players, game.max_players
            )));
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the maximum number of players per room.
    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.game.max_players = max_players;
        self
    }

    /// Overrides the solver budget for one difficulty.
    pub fn with_budget(mut self, difficulty: Difficulty, budget: SearchBudget) -> Self {
        *self.budgets.slot_mut(difficulty) = Some(budget);
        self
    }

    /// Returns the solver budget for `difficulty`: the configured override,
    /// or the built-in table entry.
    pub fn budget_for(&self, difficulty: Difficulty) -> SearchBudget {
        self.budgets
            .get(difficulty)
            .unwrap_or_else(|| SearchBudget::for_difficulty(difficulty))
    }
}

/// Room and scoring settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GameSettings {
    /// Maximum players per room.
    pub max_players: usize,

    /// Length of generated room codes.
    pub room_code_length: usize,

    /// Difficulty used when a room asks for an unknown one.
    pub default_difficulty: Difficulty,

    /// Players required before the room reports everyone ready.
    pub min_ready_players: usize,

    /// Player names are trimmed and cut to this many characters.
    pub max_name_length: usize,

    /// Points by finishing rank, first place first.
    pub rank_scores: Vec<u32>,

    /// Points for ranks beyond `rank_scores`.
    pub fallback_score: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_players: 4,
            room_code_length: 6,
            default_difficulty: Difficulty::Medium,
            min_ready_players: 2,
            max_name_length: 20,
            rank_scores: vec![100, 70, 50, 30],
            fallback_score: 10,
        }
    }
}

impl GameSettings {
    /// Points awarded for finishing at `rank` (1-based).
    pub fn score_for_rank(&self, rank: usize) -> u32 {
        rank.checked_sub(1)
            .and_then(|i| self.rank_scores.get(i))
            .copied()
            .unwrap_or(self.fallback_score)
    }
}

/// Hint solver budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchBudget {
    /// Nodes at this depth are not expanded.
    pub max_depth: usize,

    /// Wall-clock limit in milliseconds.
    pub max_time_ms: u64,

    /// Maximum number of dequeued nodes.
    pub max_nodes: u64,
}

impl SearchBudget {
    pub const fn new(max_depth: usize, max_time_ms: u64, max_nodes: u64) -> Self {
        Self {
            max_depth,
            max_time_ms,
            max_nodes,
        }
    }

    /// Built-in budget table.
    ///
    /// # Examples
    ///
    /// ```
    /// use colormerge_config::SearchBudget;
    /// use colormerge_core::Difficulty;
    ///
    /// assert_eq!(SearchBudget::for_difficulty(Difficulty::Hard), SearchBudget::new(30, 3000, 15_000));
    /// ```
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy | Difficulty::Medium => Self::new(25, 2000, 10_000),
            Difficulty::Hard => Self::new(30, 3000, 15_000),
            Difficulty::VeryHard | Difficulty::Insane => Self::new(35, 4000, 20_000),
        }
    }

    /// Returns the time limit as a Duration.
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.max_time_ms)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_time_ms(mut self, max_time_ms: u64) -> Self {
        self.max_time_ms = max_time_ms;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

/// Optional per-difficulty budget overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BudgetOverrides {
    pub easy: Option<SearchBudget>,
    pub medium: Option<SearchBudget>,
    pub hard: Option<SearchBudget>,
    pub veryhard: Option<SearchBudget>,
    pub insane: Option<SearchBudget>,
}

impl BudgetOverrides {
    /// Returns the override for `difficulty`, if any.
    pub fn get(&self, difficulty: Difficulty) -> Option<SearchBudget> {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::VeryHard => self.veryhard,
            Difficulty::Insane => self.insane,
        }
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut Option<SearchBudget> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
            Difficulty::VeryHard => &mut self.veryhard,
            Difficulty::Insane => &mut self.insane,
        }
    }
}

#[cfg(test)]
mod tests;
