//! Events published by race sessions.

use colormerge_core::Board;

use crate::player::{Player, PlayerId};
use crate::room::RoomId;

/// Something every client in a room should learn about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Player list or ready flags changed.
    PlayersChanged {
        players: Vec<Player>,
        host: Option<PlayerId>,
    },
    /// The host left and another player took over.
    HostChanged { host: PlayerId, name: String },
    /// Enough players are ready; the host may start.
    AllPlayersReady { host: Option<PlayerId> },
    /// A race began from this puzzle.
    RaceStarted { board: Board },
    /// A player's board changed.
    BoardUpdated { player: PlayerId, board: Board },
    /// A player locked in their board.
    PlayerFinished { player: PlayerId, rank: usize },
    /// Standings after a finish.
    Leaderboard { players: Vec<Player> },
    /// Every racer has finished.
    RaceEnded,
}

/// A [`SessionEvent`] tagged with its room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEvent {
    pub room: RoomId,
    pub event: SessionEvent,
}
