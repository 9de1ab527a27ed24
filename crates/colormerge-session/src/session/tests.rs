//! Race session tests.

use super::*;
use colormerge_core::PuzzleError;
use colormerge_test::{board, scenarios};
use tokio::sync::mpsc::{self, UnboundedReceiver};

const A: PlayerId = PlayerId(1);
const B: PlayerId = PlayerId(2);
const C: PlayerId = PlayerId(3);

fn session() -> (RaceSession, UnboundedReceiver<RoomEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let s = RaceSession::new(
        RoomId::parse("ROOM01"),
        Difficulty::Easy,
        GameSettings::default(),
        tx,
    );
    (s, rx)
}

fn drain(rx: &mut UnboundedReceiver<RoomEvent>) -> Vec<SessionEvent> {
    std::iter::from_fn(|| rx.try_recv().ok())
        .map(|e| e.event)
        .collect()
}

// Two moves right, then ready.
fn puzzle() -> Board {
    scenarios::two_moves_right()
}

fn finish(s: &mut RaceSession, id: PlayerId) -> usize {
    s.make_move(id, Direction::Right).unwrap();
    s.make_move(id, Direction::Right).unwrap();
    s.submit(id).unwrap()
}

#[test]
fn test_first_player_is_host() {
    let (mut s, mut rx) = session();
    s.add_player(A, "  Ada ").unwrap();
    s.add_player(B, "Bo").unwrap();

    assert_eq!(s.host(), Some(A));
    assert_eq!(s.player(A).unwrap().name, "Ada");
    let events = drain(&mut rx);
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[1],
        SessionEvent::PlayersChanged { players, host: Some(A) } if players.len() == 2
    ));
}

#[test]
fn test_room_full() {
    let (mut s, _rx) = session();
    for i in 0..4 {
        s.add_player(PlayerId(i), "p").unwrap();
    }
    assert!(matches!(
        s.add_player(PlayerId(9), "late"),
        Err(SessionError::RoomFull { max: 4, .. })
    ));
    // Rejoining with a seated id is a no-op.
    assert!(s.add_player(PlayerId(0), "p").is_ok());
}

#[test]
fn test_all_ready_needs_two_players() {
    let (mut s, mut rx) = session();
    s.add_player(A, "Ada").unwrap();
    s.set_ready(A, true).unwrap();
    assert!(!s.all_players_ready());

    s.add_player(B, "Bo").unwrap();
    drain(&mut rx);
    s.set_ready(B, true).unwrap();
    assert!(s.all_players_ready());
    let events = drain(&mut rx);
    assert_eq!(
        events.last(),
        Some(&SessionEvent::AllPlayersReady { host: Some(A) })
    );
}

#[test]
fn test_only_host_starts() {
    let (mut s, _rx) = session();
    s.add_player(A, "Ada").unwrap();
    s.add_player(B, "Bo").unwrap();

    assert_eq!(s.start(B, puzzle()), Err(SessionError::NotHost));
    s.start(A, puzzle()).unwrap();
    assert_eq!(s.start(A, puzzle()), Err(SessionError::AlreadyStarted));
    assert_eq!(s.board(A), Some(&puzzle()));
    assert_eq!(s.board(B), Some(&puzzle()));
}

#[test]
fn test_start_empty_room() {
    let (mut s, _rx) = session();
    assert_eq!(s.start(A, puzzle()), Err(SessionError::NoPlayers));
}

#[test]
fn test_moves_before_start_rejected() {
    let (mut s, _rx) = session();
    s.add_player(A, "Ada").unwrap();
    assert_eq!(s.make_move(A, Direction::Up), Err(SessionError::NotStarted));
    assert_eq!(s.submit(A), Err(SessionError::NotStarted));
}

#[test]
fn test_boards_are_independent() {
    let (mut s, mut rx) = session();
    s.add_player(A, "Ada").unwrap();
    s.add_player(B, "Bo").unwrap();
    s.start(A, puzzle()).unwrap();
    drain(&mut rx);

    assert!(s.make_move(A, Direction::Right).unwrap());
    assert_ne!(s.board(A), s.board(B));
    assert_eq!(s.board(B), Some(&puzzle()));

    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        SessionEvent::BoardUpdated { player, board } if *player == A && Some(board) == s.board(A)
    ));
}

#[test]
fn test_unready_submit_keeps_board() {
    let (mut s, _rx) = session();
    s.add_player(A, "Ada").unwrap();
    s.start(A, puzzle()).unwrap();

    assert_eq!(
        s.submit(A),
        Err(SessionError::Puzzle(PuzzleError::NotReady {
            adjacent: 0,
            total: 1
        }))
    );
    assert_eq!(s.board(A), Some(&puzzle()));
    assert!(s.finish_order().is_empty());
}

#[test]
fn test_ranking_and_scores() {
    let (mut s, mut rx) = session();
    for id in [A, B, C] {
        s.add_player(id, "p").unwrap();
    }
    s.start(A, puzzle()).unwrap();

    assert_eq!(finish(&mut s, B), 1);
    assert_eq!(finish(&mut s, A), 2);
    assert!(s.is_running());
    drain(&mut rx);
    assert_eq!(finish(&mut s, C), 3);

    assert_eq!(s.player(B).unwrap().score, 100);
    assert_eq!(s.player(A).unwrap().score, 70);
    assert_eq!(s.player(C).unwrap().score, 50);
    assert!(s.player(C).unwrap().finish_time.is_some());
    assert!(s.board(C).unwrap().is_locked());
    assert!(s.has_ended());

    let events = drain(&mut rx);
    assert!(events.contains(&SessionEvent::PlayerFinished { player: C, rank: 3 }));
    assert_eq!(events.last(), Some(&SessionEvent::RaceEnded));

    // Submitting again changes nothing.
    assert_eq!(s.submit(C), Ok(3));
    assert_eq!(s.player(C).unwrap().score, 50);
}

#[test]
fn test_scores_carry_over_between_races() {
    let (mut s, _rx) = session();
    s.add_player(A, "Ada").unwrap();
    s.start(A, puzzle()).unwrap();
    finish(&mut s, A);
    assert!(s.has_ended());

    s.start(A, puzzle()).unwrap();
    assert_eq!(s.player(A).unwrap().rank, None);
    finish(&mut s, A);
    assert_eq!(s.player(A).unwrap().score, 200);
}

#[test]
fn test_fallback_score_beyond_table() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let settings = GameSettings {
        max_players: 6,
        ..GameSettings::default()
    };
    let mut s = RaceSession::new(RoomId::parse("BIG"), Difficulty::Easy, settings, tx);
    for i in 0..5 {
        s.add_player(PlayerId(i), "p").unwrap();
    }
    s.start(PlayerId(0), puzzle()).unwrap();
    for i in 0..5 {
        finish(&mut s, PlayerId(i));
    }
    assert_eq!(s.player(PlayerId(4)).unwrap().score, 10);
}

#[test]
fn test_host_leaves() {
    let (mut s, mut rx) = session();
    s.add_player(A, "Ada").unwrap();
    s.add_player(B, "Bo").unwrap();
    s.add_player(C, "Cy").unwrap();
    drain(&mut rx);

    assert_eq!(s.remove_player(A), Ok(false));
    assert_eq!(s.host(), Some(B));
    let events = drain(&mut rx);
    assert!(events.contains(&SessionEvent::HostChanged {
        host: B,
        name: "Bo".into()
    }));

    assert_eq!(s.remove_player(C), Ok(false));
    assert_eq!(s.host(), Some(B));
    assert_eq!(s.remove_player(B), Ok(true));
    assert!(s.is_empty());
    assert_eq!(s.remove_player(B), Err(SessionError::UnknownPlayer(B)));
}

#[test]
fn test_leaving_last_unfinished_racer_ends_race() {
    let (mut s, mut rx) = session();
    s.add_player(A, "Ada").unwrap();
    s.add_player(B, "Bo").unwrap();
    s.start(A, puzzle()).unwrap();
    finish(&mut s, A);
    drain(&mut rx);

    s.remove_player(B).unwrap();
    assert!(s.has_ended());
    assert_eq!(drain(&mut rx).last(), Some(&SessionEvent::RaceEnded));
}

#[test]
fn test_late_joiner_spectates() {
    let (mut s, _rx) = session();
    s.add_player(A, "Ada").unwrap();
    s.start(A, puzzle()).unwrap();
    s.add_player(B, "Bo").unwrap();

    assert!(s.board(B).is_none());
    assert_eq!(
        s.make_move(B, Direction::Up),
        Err(SessionError::UnknownPlayer(B))
    );
    finish(&mut s, A);
    assert!(s.has_ended());
}

#[test]
fn test_synchronized_move_reaches_ready() {
    let (mut s, _rx) = session();
    s.add_player(A, "Ada").unwrap();
    let start = board(5, &[((1, 0), (1, 2)), ((3, 0), (3, 2))]);
    s.start(A, start).unwrap();

    s.make_move(A, Direction::Right).unwrap();
    assert!(colormerge_core::is_ready(s.board(A).unwrap()));
    assert_eq!(s.submit(A), Ok(1));
}
