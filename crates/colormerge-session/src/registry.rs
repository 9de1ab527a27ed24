//! Keyed registry of live rooms.

use std::collections::HashMap;

use colormerge_config::GameConfig;
use colormerge_core::{Difficulty, Direction, PuzzleGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

use crate::error::{Result, SessionError};
use crate::event::RoomEvent;
use crate::player::PlayerId;
use crate::room::RoomId;
use crate::session::RaceSession;

/// All rooms of one server process.
///
/// # Examples
///
/// ```
/// use colormerge_config::GameConfig;
/// use colormerge_session::{PlayerId, RoomRegistry};
///
/// let (mut rooms, _events) = RoomRegistry::new(GameConfig::default().with_random_seed(1));
/// let room = rooms.create_room(PlayerId(1), "Ada", "hard").unwrap();
/// rooms.join_room(&room.as_str().to_lowercase(), PlayerId(2), "Bo").unwrap();
///
/// rooms.start_race(&room, PlayerId(1)).unwrap();
/// let session = rooms.room(&room).unwrap();
/// assert!(session.is_running());
/// assert_eq!(session.board(PlayerId(1)), session.board(PlayerId(2)));
/// ```
#[derive(Debug)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, RaceSession>,
    config: GameConfig,
    generator: PuzzleGenerator,
    code_rng: ChaCha8Rng,
    events: UnboundedSender<RoomEvent>,
}

impl RoomRegistry {
    /// Creates an empty registry and the receiver for all room events.
    pub fn new(config: GameConfig) -> (Self, UnboundedReceiver<RoomEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let (generator, code_rng) = match config.random_seed {
            Some(seed) => (
                PuzzleGenerator::seeded(seed),
                ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (PuzzleGenerator::from_os_rng(), ChaCha8Rng::from_os_rng()),
        };

        let registry = Self {
            rooms: HashMap::new(),
            config,
            generator,
            code_rng,
            events,
        };
        (registry, receiver)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room(&self, id: &RoomId) -> Option<&RaceSession> {
        self.rooms.get(id)
    }

    /// Opens a room hosted by `host`. Unknown difficulty tags fall back to
    /// the configured default.
    ///
    /// Nothing is registered when the host cannot be seated.
    pub fn create_room(&mut self, host: PlayerId, name: &str, difficulty: &str) -> Result<RoomId> {
        let difficulty = difficulty.parse::<Difficulty>().unwrap_or_else(|_| {
            warn!(event = "invalid_difficulty", tag = difficulty);
            self.config.game.default_difficulty
        });

        let id = loop {
            let candidate = RoomId::random(&mut self.code_rng, self.config.game.room_code_length);
            if !self.rooms.contains_key(&candidate) {
                break candidate;
            }
        };

        let mut session = RaceSession::new(
            id.clone(),
            difficulty,
            self.config.game.clone(),
            self.events.clone(),
        );
        session.add_player(host, name)?;
        info!(event = "room_created", room = %id, host = %host, difficulty = %difficulty);
        self.rooms.insert(id.clone(), session);
        Ok(id)
    }

    /// Seats a player in the room whose code matches `code`.
    pub fn join_room(&mut self, code: &str, player: PlayerId, name: &str) -> Result<RoomId> {
        let id = RoomId::parse(code);
        self.session_mut(&id)?.add_player(player, name)?;
        Ok(id)
    }

    /// Removes `player` from every room they sit in; empty rooms are
    /// deleted. Returns the rooms that were left.
    pub fn leave(&mut self, player: PlayerId) -> Vec<RoomId> {
        let seated: Vec<RoomId> = self
            .rooms
            .iter()
            .filter(|(_, s)| s.player(player).is_some())
            .map(|(id, _)| id.clone())
            .collect();

        for id in &seated {
            let emptied = self
                .rooms
                .get_mut(id)
                .and_then(|s| s.remove_player(player).ok())
                .unwrap_or(false);
            if emptied {
                self.rooms.remove(id);
                info!(event = "room_deleted", room = %id);
            }
        }
        seated
    }

    pub fn set_ready(&mut self, room: &RoomId, player: PlayerId) -> Result<()> {
        self.session_mut(room)?.set_ready(player, true)
    }

    /// Generates a puzzle at the room's difficulty and starts the race.
    pub fn start_race(&mut self, room: &RoomId, player: PlayerId) -> Result<()> {
        let session = self
            .rooms
            .get_mut(room)
            .ok_or_else(|| SessionError::RoomNotFound(room.clone()))?;
        let puzzle = self.generator.generate(session.difficulty());
        session.start(player, puzzle)
    }

    pub fn make_move(&mut self, room: &RoomId, player: PlayerId, direction: Direction) -> Result<bool> {
        self.session_mut(room)?.make_move(player, direction)
    }

    pub fn submit(&mut self, room: &RoomId, player: PlayerId) -> Result<usize> {
        self.session_mut(room)?.submit(player)
    }

    fn session_mut(&mut self, room: &RoomId) -> Result<&mut RaceSession> {
        self.rooms
            .get_mut(room)
            .ok_or_else(|| SessionError::RoomNotFound(room.clone()))
    }
}
