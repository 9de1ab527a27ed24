//! One room's race: players, per-player boards and ranking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use colormerge_config::GameSettings;
use colormerge_core::{apply_move, submit, Board, Difficulty, Direction};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::error::{Result, SessionError};
use crate::event::{RoomEvent, SessionEvent};
use crate::player::{sanitize_name, Player, PlayerId};
use crate::room::RoomId;

/// A room in which every player races on their own copy of one puzzle.
///
/// Each board is written only through its owner's [`make_move`] and
/// [`submit`] calls; events are published once the new board is in place.
///
/// [`make_move`]: RaceSession::make_move
/// [`submit`]: RaceSession::submit
#[derive(Debug)]
pub struct RaceSession {
    room: RoomId,
    difficulty: Difficulty,
    settings: GameSettings,
    players: Vec<Player>,
    host: Option<PlayerId>,
    boards: HashMap<PlayerId, Board>,
    finish_order: Vec<PlayerId>,
    started: bool,
    ended: bool,
    started_at: Option<Instant>,
    events: UnboundedSender<RoomEvent>,
}

impl RaceSession {
    /// Creates an empty room; the first player to join becomes host.
    pub fn new(
        room: RoomId,
        difficulty: Difficulty,
        settings: GameSettings,
        events: UnboundedSender<RoomEvent>,
    ) -> Self {
        Self {
            room,
            difficulty,
            settings,
            players: Vec::new(),
            host: None,
            boards: HashMap::new(),
            finish_order: Vec::new(),
            started: false,
            ended: false,
            started_at: None,
            events,
        }
    }

    pub fn room(&self) -> &RoomId {
        &self.room
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn host(&self) -> Option<PlayerId> {
        self.host
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn board(&self, id: PlayerId) -> Option<&Board> {
        self.boards.get(&id)
    }

    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    /// Whether a race is in progress.
    pub fn is_running(&self) -> bool {
        self.started && !self.ended
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.settings.max_players
    }

    /// Time since the current race started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|t| t.elapsed())
    }

    /// Seats a player. Players joining a running race watch until the next
    /// one; they get no board.
    pub fn add_player(&mut self, id: PlayerId, name: &str) -> Result<()> {
        if self.player(id).is_some() {
            return Ok(());
        }
        if self.is_full() {
            return Err(SessionError::RoomFull {
                room: self.room.clone(),
                max: self.settings.max_players,
            });
        }

        let name = sanitize_name(name, self.settings.max_name_length);
        info!(event = "player_joined", room = %self.room, player = %id, name = %name);
        self.players.push(Player::new(id, name));
        if self.host.is_none() {
            self.host = Some(id);
        }
        self.publish_players();
        Ok(())
    }

    /// Removes a player, handing the host role to the first remaining
    /// player. Returns whether the room is now empty.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<bool> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(SessionError::UnknownPlayer(id))?;
        self.players.remove(index);
        self.boards.remove(&id);
        info!(event = "player_left", room = %self.room, player = %id);

        if self.players.is_empty() {
            self.host = None;
            return Ok(true);
        }

        self.publish_players();
        if self.host == Some(id) {
            let next = &self.players[0];
            self.host = Some(next.id);
            info!(event = "host_changed", room = %self.room, host = %next.id);
            let event = SessionEvent::HostChanged {
                host: next.id,
                name: next.name.clone(),
            };
            self.publish(event);
        }
        if self.is_running() {
            self.end_if_all_finished();
        }
        Ok(false)
    }

    /// Marks a player ready and announces when the room is ready to start.
    pub fn set_ready(&mut self, id: PlayerId, ready: bool) -> Result<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SessionError::UnknownPlayer(id))?;
        player.ready = ready;

        self.publish_players();
        if self.all_players_ready() {
            self.publish(SessionEvent::AllPlayersReady { host: self.host });
        }
        Ok(())
    }

    /// At least the configured minimum of players, all ready.
    pub fn all_players_ready(&self) -> bool {
        self.players.len() >= self.settings.min_ready_players
            && self.players.iter().all(|p| p.ready)
    }

    /// Starts a race on `puzzle`; every seated player gets a copy.
    ///
    /// Scores carry over from earlier races in the room; ranks reset.
    pub fn start(&mut self, requester: PlayerId, puzzle: Board) -> Result<()> {
        if self.players.is_empty() {
            return Err(SessionError::NoPlayers);
        }
        if self.host != Some(requester) {
            return Err(SessionError::NotHost);
        }
        if self.is_running() {
            return Err(SessionError::AlreadyStarted);
        }

        self.finish_order.clear();
        self.boards.clear();
        for player in &mut self.players {
            player.rank = None;
            player.finish_time = None;
            self.boards.insert(player.id, puzzle.clone());
        }
        self.started = true;
        self.ended = false;
        self.started_at = Some(Instant::now());

        info!(
            event = "race_start",
            room = %self.room,
            players = self.players.len(),
            difficulty = %self.difficulty,
        );
        self.publish(SessionEvent::RaceStarted { board: puzzle });
        let ids: Vec<PlayerId> = self.players.iter().map(|p| p.id).collect();
        for id in ids {
            self.publish_board(id);
        }
        Ok(())
    }

    /// Applies `direction` to the player's board. Returns whether any ball
    /// moved.
    pub fn make_move(&mut self, id: PlayerId, direction: Direction) -> Result<bool> {
        let board = self.racing_board(id)?;
        let outcome = apply_move(board, direction);
        let moved = outcome.any_moved();
        self.boards.insert(id, outcome.board);

        debug!(event = "move", room = %self.room, player = %id, direction = %direction, moved);
        self.publish_board(id);
        Ok(moved)
    }

    /// Locks in the player's board and returns their rank.
    ///
    /// A player who already finished gets their rank back unchanged.
    pub fn submit(&mut self, id: PlayerId) -> Result<usize> {
        if let Some(rank) = self.player(id).and_then(|p| p.rank) {
            return Ok(rank);
        }

        let locked = submit(self.racing_board(id)?)?;
        self.boards.insert(id, locked);
        self.finish_order.push(id);
        let rank = self.finish_order.len();
        let points = self.settings.score_for_rank(rank);
        let finish_time = self.elapsed().unwrap_or_default();

        if let Some(player) = self.players.iter_mut().find(|p| p.id == id) {
            player.rank = Some(rank);
            player.finish_time = Some(finish_time);
            player.score += points;
        }

        info!(
            event = "player_finished",
            room = %self.room,
            player = %id,
            rank,
            points,
            finish_ms = finish_time.as_millis() as u64,
        );
        self.publish_board(id);
        self.publish(SessionEvent::PlayerFinished { player: id, rank });
        self.publish(SessionEvent::Leaderboard {
            players: self.players.clone(),
        });
        self.end_if_all_finished();
        Ok(rank)
    }

    fn racing_board(&self, id: PlayerId) -> Result<&Board> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        self.boards.get(&id).ok_or(SessionError::UnknownPlayer(id))
    }

    // Racers are the seated players holding a board.
    fn end_if_all_finished(&mut self) {
        if self.ended {
            return;
        }
        let mut racers = self
            .players
            .iter()
            .filter(|p| self.boards.contains_key(&p.id))
            .peekable();
        if racers.peek().is_none() {
            return;
        }
        if racers.all(|p| p.has_finished()) {
            self.ended = true;
            info!(event = "race_end", room = %self.room, finished = self.finish_order.len());
            self.publish(SessionEvent::RaceEnded);
        }
    }

    fn publish_players(&self) {
        self.publish(SessionEvent::PlayersChanged {
            players: self.players.clone(),
            host: self.host,
        });
    }

    fn publish_board(&self, id: PlayerId) {
        if let Some(board) = self.boards.get(&id) {
            self.publish(SessionEvent::BoardUpdated {
                player: id,
                board: board.clone(),
            });
        }
    }

    fn publish(&self, event: SessionEvent) {
        let event = RoomEvent {
            room: self.room.clone(),
            event,
        };
        if self.events.send(event).is_err() {
            debug!(event = "session_receiver_closed", room = %self.room);
        }
    }
}

#[cfg(test)]
mod tests;
