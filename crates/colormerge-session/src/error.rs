//! Error types for race sessions.

use colormerge_core::PuzzleError;
use thiserror::Error;

use crate::player::PlayerId;
use crate::room::RoomId;

/// Session operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    #[error("room {room} is full ({max} players)")]
    RoomFull { room: RoomId, max: usize },

    #[error("only the host can start the race")]
    NotHost,

    #[error("the race has not started")]
    NotStarted,

    #[error("the race is already running")]
    AlreadyStarted,

    #[error("player {0} is not racing in this room")]
    UnknownPlayer(PlayerId),

    #[error("no players in room")]
    NoPlayers,

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
