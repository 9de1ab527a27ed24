//! Off-thread hint computation.
//!
//! [`HintService`] hands solver jobs to a dedicated worker thread and
//! publishes results as [`HintEvent`]s on a tokio channel. Each owner (a
//! player, a session seat) has at most one job in flight; a plan computed
//! for an unchanged board is served again from the cache.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use colormerge_config::GameConfig;
use colormerge_core::{is_ready, Board};
use thiserror::Error;
use tokio::sync::mpsc as events;
use tracing::{debug, info};

use crate::explain::{Confidence, MoveDescriptor};
use crate::solver::{AStarSolver, SolveOutcome, SolveResult};
use crate::termination::ExternalTermination;

/// Hint request error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("a hint is already being computed for this player")]
    AlreadyInFlight,

    #[error("hint worker has stopped")]
    WorkerStopped,
}

/// Next move of a plan with how far the plan reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub next: MoveDescriptor,
    /// Length of the plan the move was taken from.
    pub total_steps: usize,
    pub confidence: Confidence,
    pub outcome: SolveOutcome,
}

impl Hint {
    /// Builds a hint from a plan; `None` when the plan is empty.
    pub fn from_plan(moves: &[MoveDescriptor], outcome: SolveOutcome) -> Option<Self> {
        let next = moves.first()?.clone();
        let total_steps = moves.len();
        Some(Self {
            next,
            total_steps,
            confidence: Confidence::from_steps(total_steps),
            outcome,
        })
    }
}

/// Answer to a hint request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResponse {
    /// Every ball is next to its target; the player should submit.
    Ready,
    Move(Hint),
    /// The solver found no helpful move within its budget.
    NoHint,
}

impl HintResponse {
    fn from_result(result: &SolveResult) -> Self {
        Hint::from_plan(&result.moves, result.outcome)
            .map(HintResponse::Move)
            .unwrap_or(HintResponse::NoHint)
    }
}

/// How a request was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Answered without running the solver.
    Immediate(HintResponse),
    /// Handed to the worker; the answer arrives as a [`HintEvent`].
    Queued,
}

/// Published by the worker when a job finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintEvent<K> {
    pub owner: K,
    pub board: Board,
    pub response: HintResponse,
}

struct HintJob<K> {
    owner: K,
    board: Board,
}

struct CachedPlan {
    board: Board,
    moves: Vec<MoveDescriptor>,
    outcome: SolveOutcome,
}

struct Shared<K> {
    in_flight: Mutex<HashSet<K>>,
    cache: Mutex<HashMap<K, CachedPlan>>,
    stop: Arc<AtomicBool>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Client handle for requesting hints.
///
/// # Example
///
/// ```
/// use colormerge_config::GameConfig;
/// use colormerge_core::{Ball, Board, Color, Difficulty};
/// use colormerge_solver::{Dispatch, HintResponse, HintService};
///
/// let (service, mut events) = HintService::<u32>::spawn(GameConfig::default());
///
/// let board = Board::new(5, Difficulty::Easy, vec![
///     Ball::new(Color::Red, (2, 0), (2, 3)),
/// ]);
/// assert_eq!(service.request(1, &board), Ok(Dispatch::Queued));
///
/// let event = events.blocking_recv().unwrap();
/// assert_eq!(event.owner, 1);
/// assert!(matches!(event.response, HintResponse::Move(_)));
///
/// // Same board again: answered from the cache.
/// assert!(matches!(service.request(1, &board), Ok(Dispatch::Immediate(HintResponse::Move(_)))));
/// service.shutdown();
/// ```
pub struct HintService<K> {
    jobs: Option<mpsc::Sender<HintJob<K>>>,
    shared: Arc<Shared<K>>,
    worker: Option<JoinHandle<()>>,
}

/// Worker side of a [`HintService`]; runs the solver for queued jobs.
pub struct HintWorker<K> {
    jobs: mpsc::Receiver<HintJob<K>>,
    events: events::UnboundedSender<HintEvent<K>>,
    shared: Arc<Shared<K>>,
    config: GameConfig,
}

impl<K> HintService<K>
where
    K: Clone + Eq + Hash + Debug + Send + 'static,
{
    /// Creates a service and its worker without starting a thread.
    pub fn new(
        config: GameConfig,
    ) -> (Self, HintWorker<K>, events::UnboundedReceiver<HintEvent<K>>) {
        let (job_tx, job_rx) = mpsc::channel();
        let (event_tx, event_rx) = events::unbounded_channel();
        let shared = Arc::new(Shared {
            in_flight: Mutex::new(HashSet::new()),
            cache: Mutex::new(HashMap::new()),
            stop: Arc::new(AtomicBool::new(false)),
        });

        let service = Self {
            jobs: Some(job_tx),
            shared: Arc::clone(&shared),
            worker: None,
        };
        let worker = HintWorker {
            jobs: job_rx,
            events: event_tx,
            shared,
            config,
        };
        (service, worker, event_rx)
    }

    /// Creates a service with its worker running on a dedicated thread.
    pub fn spawn(config: GameConfig) -> (Self, events::UnboundedReceiver<HintEvent<K>>) {
        let (mut service, worker, events) = Self::new(config);
        service.worker = Some(worker.spawn());
        (service, events)
    }

    /// Requests a hint for `owner`'s current board.
    ///
    /// Goal-ready boards and boards with a cached plan are answered
    /// immediately. Otherwise the job is queued unless `owner` already has
    /// one in flight.
    pub fn request(&self, owner: K, board: &Board) -> Result<Dispatch, HintError> {
        if is_ready(board) {
            return Ok(Dispatch::Immediate(HintResponse::Ready));
        }

        if let Some(hint) = self.cached(&owner, board) {
            debug!(event = "hint_cache_hit", owner = ?owner);
            return Ok(Dispatch::Immediate(HintResponse::Move(hint)));
        }

        if !lock(&self.shared.in_flight).insert(owner.clone()) {
            return Err(HintError::AlreadyInFlight);
        }

        let job = HintJob {
            owner: owner.clone(),
            board: board.clone(),
        };
        let sent = self.jobs.as_ref().is_some_and(|tx| tx.send(job).is_ok());
        if !sent {
            lock(&self.shared.in_flight).remove(&owner);
            return Err(HintError::WorkerStopped);
        }
        Ok(Dispatch::Queued)
    }

    /// Whether `owner` has a job queued or running.
    pub fn is_in_flight(&self, owner: &K) -> bool {
        lock(&self.shared.in_flight).contains(owner)
    }

    /// Drops the cached plan of `owner`.
    pub fn forget(&self, owner: &K) {
        lock(&self.shared.cache).remove(owner);
    }

    fn cached(&self, owner: &K, board: &Board) -> Option<Hint> {
        let cache = lock(&self.shared.cache);
        let plan = cache.get(owner).filter(|p| p.board == *board)?;
        Hint::from_plan(&plan.moves, plan.outcome)
    }
}

impl<K> HintService<K> {
    /// Cancels the running job, stops the worker and waits for it.
    pub fn shutdown(mut self) {
        self.stop_worker();
    }

    fn stop_worker(&mut self) {
        self.shared.stop.store(true, Ordering::SeqCst);
        self.jobs = None;
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                debug!(event = "hint_worker_panicked");
            }
        }
    }
}

impl<K> Drop for HintService<K> {
    fn drop(&mut self) {
        self.stop_worker();
    }
}

impl<K> HintWorker<K>
where
    K: Clone + Eq + Hash + Debug + Send + 'static,
{
    /// Runs [`HintWorker::run`] on a new thread.
    pub fn spawn(self) -> JoinHandle<()> {
        std::thread::spawn(move || self.run())
    }

    /// Processes jobs until the service is dropped or shut down.
    pub fn run(self) {
        info!(event = "hint_worker_start");
        while let Ok(job) = self.jobs.recv() {
            if self.shared.stop.load(Ordering::SeqCst) {
                break;
            }
            self.process(job);
        }
        info!(event = "hint_worker_stop");
    }

    fn process(&self, job: HintJob<K>) {
        let budget = self.config.budget_for(job.board.difficulty());
        let solver = AStarSolver::new(budget)
            .with_external(ExternalTermination::new(Arc::clone(&self.shared.stop)));
        let result = solver.solve_with_result(&job.board);
        let response = HintResponse::from_result(&result);

        if is_cacheable(&result) {
            lock(&self.shared.cache).insert(
                job.owner.clone(),
                CachedPlan {
                    board: job.board.clone(),
                    moves: result.moves,
                    outcome: result.outcome,
                },
            );
        }
        lock(&self.shared.in_flight).remove(&job.owner);

        let event = HintEvent {
            owner: job.owner,
            board: job.board,
            response,
        };
        if self.events.send(event).is_err() {
            debug!(event = "hint_receiver_closed");
        }
    }
}

// Plans cut short by shutdown are not reused.
fn is_cacheable(result: &SolveResult) -> bool {
    !result.moves.is_empty() && result.outcome != SolveOutcome::Cancelled
}

#[cfg(test)]
mod tests {
    use super::*;
    use colormerge_core::{Ball, Color, Difficulty};

    fn board() -> Board {
        Board::new(
            5,
            Difficulty::Easy,
            vec![
                Ball::new(Color::Red, (0, 0), (2, 2)),
                Ball::new(Color::Orange, (4, 4), (4, 1)),
            ],
        )
    }

    #[test]
    fn test_ready_board_answered_without_worker() {
        let (service, worker, _events) = HintService::<u8>::new(GameConfig::default());
        drop(worker);
        let ready = Board::new(
            5,
            Difficulty::Easy,
            vec![Ball::new(Color::Red, (0, 0), (0, 1))],
        );
        assert_eq!(
            service.request(1, &ready),
            Ok(Dispatch::Immediate(HintResponse::Ready))
        );
    }

    #[test]
    fn test_second_request_rejected_while_in_flight() {
        let (service, worker, mut events) = HintService::<u8>::new(GameConfig::default());

        assert_eq!(service.request(1, &board()), Ok(Dispatch::Queued));
        assert!(service.is_in_flight(&1));
        assert_eq!(service.request(1, &board()), Err(HintError::AlreadyInFlight));
        // Other owners are independent.
        assert_eq!(service.request(2, &board()), Ok(Dispatch::Queued));

        let handle = worker.spawn();
        let first = events.blocking_recv().unwrap();
        let second = events.blocking_recv().unwrap();
        assert_eq!(first.owner, 1);
        assert_eq!(second.owner, 2);
        assert!(!service.is_in_flight(&1));

        service.shutdown();
        handle.join().unwrap();
    }

    #[test]
    fn test_cache_serves_unchanged_board_only() {
        let (service, mut events) = HintService::<u8>::spawn(GameConfig::default());

        assert_eq!(service.request(1, &board()), Ok(Dispatch::Queued));
        let event = events.blocking_recv().unwrap();
        let HintResponse::Move(hint) = event.response else {
            panic!("expected a move, got {:?}", event.response);
        };

        assert_eq!(
            service.request(1, &board()),
            Ok(Dispatch::Immediate(HintResponse::Move(hint)))
        );

        let moved = colormerge_core::apply_move(&board(), colormerge_core::Direction::Down).board;
        assert_eq!(service.request(1, &moved), Ok(Dispatch::Queued));
        events.blocking_recv().unwrap();

        service.forget(&1);
        assert_eq!(service.request(1, &board()), Ok(Dispatch::Queued));
        events.blocking_recv().unwrap();
    }

    #[test]
    fn test_stopped_worker_rejects_requests() {
        let (service, worker, _events) = HintService::<u8>::new(GameConfig::default());
        drop(worker);
        assert_eq!(service.request(1, &board()), Err(HintError::WorkerStopped));
        assert!(!service.is_in_flight(&1));
    }

    #[test]
    fn test_hint_confidence_follows_plan_length() {
        let (service, mut events) = HintService::<u8>::spawn(GameConfig::default());
        service.request(1, &board()).unwrap();
        let event = events.blocking_recv().unwrap();
        let HintResponse::Move(hint) = event.response else {
            panic!("expected a move, got {:?}", event.response);
        };
        assert_eq!(hint.next.step, 1);
        assert!(hint.total_steps >= 1);
        assert_eq!(hint.confidence, Confidence::from_steps(hint.total_steps));
    }

    #[test]
    fn test_cancelled_plans_are_not_cached() {
        let mut result = AStarSolver::for_difficulty(Difficulty::Easy).solve_with_result(&board());
        assert!(!result.moves.is_empty());
        assert!(is_cacheable(&result));

        result.outcome = SolveOutcome::Cancelled;
        assert!(!is_cacheable(&result));

        result.outcome = SolveOutcome::NodeLimit;
        assert!(is_cacheable(&result));
        result.moves.clear();
        assert!(!is_cacheable(&result));
    }
}
