//! Multiplayer race sessions for Color Merge.
//!
//! A [`RaceSession`] gives every player in a room their own copy of one
//! puzzle, ranks players as they lock in their boards and publishes
//! [`RoomEvent`]s on a tokio channel for the transport layer to forward.
//! [`RoomRegistry`] keys sessions by room code.

pub mod error;
pub mod event;
pub mod player;
pub mod registry;
pub mod room;
pub mod session;

pub use error::{Result, SessionError};
pub use event::{RoomEvent, SessionEvent};
pub use player::{sanitize_name, Player, PlayerId};
pub use registry::RoomRegistry;
pub use room::RoomId;
pub use session::RaceSession;
