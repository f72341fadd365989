//! Background solver thread.
//!
//! Solving a scramble can take a noticeable moment, so it runs on a shared
//! worker thread while the player is already moving tiles. Requests and
//! responses carry the [`GameId`] they were made for; the game drops answers
//! that arrive after a newer game has started. Dropping a [`WorkHandle`]
//! cancels its request, so a queued solve for an abandoned game never runs.

use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicBool, Ordering},
    mpsc,
};

use rotaslide_core::PuzzleState;
use rotaslide_game::{Game, GameId};
use rotaslide_solver::{OptimalMoveSolver, SearchLimits, SolveOutcome};

/// A board to solve, tagged with the game it belongs to.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub game_id: GameId,
    pub board: PuzzleState,
    pub limits: SearchLimits,
}

/// A solver answer, tagged with the game it was computed for.
#[derive(Debug, Clone)]
pub struct SolveResponse {
    pub game_id: GameId,
    pub outcome: SolveOutcome,
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WorkError {
    /// The background channel was disconnected unexpectedly.
    #[display("worker disconnected")]
    WorkerDisconnected,
}

impl SolveRequest {
    /// Builds the request for a game's starting board.
    #[must_use]
    pub fn for_game(game: &Game, limits: SearchLimits) -> Self {
        Self {
            game_id: game.id(),
            board: game.initial_state().clone(),
            limits,
        }
    }

    /// Solves the request on the current thread.
    #[must_use]
    pub fn handle(self) -> SolveResponse {
        let outcome = OptimalMoveSolver::new(self.limits).solve(&self.board);
        SolveResponse {
            game_id: self.game_id,
            outcome,
        }
    }
}

struct WorkRequestEnvelope {
    request: SolveRequest,
    cancelled: Arc<AtomicBool>,
    response_tx: mpsc::Sender<SolveResponse>,
}

impl WorkRequestEnvelope {
    /// Pairs a request with the handle that receives its answer.
    fn new(request: SolveRequest) -> (Self, WorkHandle) {
        let game_id = request.game_id;
        let cancelled = Arc::new(AtomicBool::new(false));
        let (response_tx, receiver) = mpsc::channel();
        let envelope = Self {
            request,
            cancelled: Arc::clone(&cancelled),
            response_tx,
        };
        let handle = WorkHandle {
            game_id,
            cancelled,
            receiver,
        };
        (envelope, handle)
    }

    /// Solves the request unless its handle is gone. Returns whether it ran.
    fn run(self) -> bool {
        if self.cancelled.load(Ordering::Acquire) {
            log::debug!("game {}: solve skipped, handle dropped", self.request.game_id);
            return false;
        }
        let response = self.request.handle();
        let _ = self.response_tx.send(response);
        true
    }
}

// Shared worker thread sender reused across requests.
static WORKER_SENDER: OnceLock<mpsc::Sender<WorkRequestEnvelope>> = OnceLock::new();

fn worker_sender() -> &'static mpsc::Sender<WorkRequestEnvelope> {
    WORKER_SENDER.get_or_init(|| {
        let (tx, rx) = mpsc::channel::<WorkRequestEnvelope>();
        std::thread::spawn(move || {
            while let Ok(envelope) = rx.recv() {
                envelope.run();
            }
        });
        tx
    })
}

/// A handle for polling background work completion.
///
/// Dropping the handle cancels the request if the worker has not started it.
#[derive(Debug)]
pub struct WorkHandle {
    game_id: GameId,
    cancelled: Arc<AtomicBool>,
    receiver: mpsc::Receiver<SolveResponse>,
}

impl WorkHandle {
    /// Returns the game the pending answer belongs to.
    #[must_use]
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    /// Attempts to poll for a completed response.
    pub fn poll(&mut self) -> Result<Option<SolveResponse>, WorkError> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkError::WorkerDisconnected),
        }
    }

    /// Blocks until the response arrives.
    pub fn wait(self) -> Result<SolveResponse, WorkError> {
        self.receiver
            .recv()
            .map_err(|_| WorkError::WorkerDisconnected)
    }
}

impl Drop for WorkHandle {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

/// Enqueues a solve on the shared worker thread and returns a handle for polling completion.
pub fn enqueue(request: SolveRequest) -> Result<WorkHandle, WorkError> {
    let game_id = request.game_id;
    let (envelope, handle) = WorkRequestEnvelope::new(request);
    worker_sender()
        .send(envelope)
        .map_err(|_| WorkError::WorkerDisconnected)?;
    log::debug!("game {game_id}: solve queued");
    Ok(handle)
}
