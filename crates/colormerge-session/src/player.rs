//! Players and their race standing.

use std::fmt;
use std::time::Duration;

/// Connection-scoped player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// A player seated in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub ready: bool,
    /// Finishing position in the current race, 1-based.
    pub rank: Option<usize>,
    /// Points accumulated across races in this room.
    pub score: u32,
    /// Time from race start to successful submit.
    pub finish_time: Option<Duration>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ready: false,
            rank: None,
            score: 0,
            finish_time: None,
        }
    }

    pub fn has_finished(&self) -> bool {
        self.rank.is_some()
    }
}

/// Trims surrounding whitespace and keeps at most `max_len` characters.
///
/// # Examples
///
/// ```
/// use colormerge_session::sanitize_name;
///
/// assert_eq!(sanitize_name("  Ada  ", 20), "Ada");
/// assert_eq!(sanitize_name("abcdefgh", 5), "abcde");
/// ```
pub fn sanitize_name(raw: &str, max_len: usize) -> String {
    raw.trim().chars().take(max_len).collect()
}
