//! Shared, lock-protected access to one live game.
//!
//! Network handlers, timers and renderers hold clones of the same
//! [`GameHandle`]. Every mutation (append, prune, resync) runs under the
//! mutex; readers either query under the lock or take a [`Game`] copy with
//! [`GameHandle::freeze`] and work on that.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::domain::moves::{ActionToken, Actor, Move};
use crate::domain::result::GameResult;
use crate::domain::rules::Seat;
use crate::domain::snapshot::{StateSnapshot, Viewer};
use crate::domain::state::TableRules;
use crate::errors::domain::DomainError;
use crate::game::projection::Game;

#[derive(Debug)]
struct Session {
    game: Game,
    last_activity: Instant,
    idle_limit: Duration,
}

#[derive(Debug, Clone)]
pub struct GameHandle {
    inner: Arc<Mutex<Session>>,
}

impl GameHandle {
    pub fn new(rules: TableRules, idle_limit: Duration) -> Self {
        Self::from_game(Game::new(rules), idle_limit)
    }

    pub fn from_game(game: Game, idle_limit: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Session {
                game,
                last_activity: Instant::now(),
                idle_limit,
            })),
        }
    }

    pub fn append(&self, mv: Move) -> Result<usize, DomainError> {
        self.append_at(mv, Instant::now())
    }

    /// Append with an explicit activity time.
    pub fn append_at(&self, mv: Move, now: Instant) -> Result<usize, DomainError> {
        let mut session = self.inner.lock();
        let index = session.game.append(mv)?;
        session.last_activity = now;
        Ok(index)
    }

    pub fn prune(&self, len: usize) -> Result<(), DomainError> {
        self.inner.lock().game.prune(len)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().game.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().game.is_empty()
    }

    pub fn snapshot_at(&self, index: usize, viewer: Viewer) -> Result<StateSnapshot, DomainError> {
        self.inner.lock().game.snapshot_at(index, viewer)
    }

    pub fn latest(&self, viewer: Viewer) -> StateSnapshot {
        self.inner.lock().game.latest(viewer)
    }

    pub fn result(&self) -> Option<GameResult> {
        self.inner.lock().game.result().cloned()
    }

    /// Copy of the game for lock-free history queries.
    pub fn freeze(&self) -> Game {
        self.inner.lock().game.clone()
    }

    /// Run several steps atomically.
    pub fn with_game<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut session = self.inner.lock();
        f(&mut session.game)
    }

    /// If the seat to move has been idle past the limit, record its timeout
    /// and return it.
    pub fn poll_idle(&self, now: Instant) -> Result<Option<Seat>, DomainError> {
        let mut session = self.inner.lock();
        let Some(Actor::Seat(seat)) = session.game.current().to_move else {
            return Ok(None);
        };
        if now.saturating_duration_since(session.last_activity) < session.idle_limit {
            return Ok(None);
        }
        session
            .game
            .append(Move::world(ActionToken::Timeout(seat)))?;
        session.last_activity = now;
        info!(seat, "seat timed out");
        Ok(Some(seat))
    }

    /// Compare the local reconstruction with an authoritative snapshot. On
    /// mismatch the local log is discarded and `Desync` returned; the
    /// caller is expected to [`resync`](Self::resync). A snapshot ahead of
    /// the local log only means the log is behind: that is `NotFound` and
    /// nothing is discarded.
    pub fn verify(&self, authoritative: &StateSnapshot) -> Result<(), DomainError> {
        let mut session = self.inner.lock();
        if authoritative.index > session.game.len() {
            return Err(DomainError::not_found(format!(
                "state {} (local log has {} moves)",
                authoritative.index,
                session.game.len()
            )));
        }
        let local = session
            .game
            .snapshot_at(authoritative.index, authoritative.viewer);
        let mismatch = match local {
            Ok(local) if local == *authoritative => return Ok(()),
            Ok(local) => format!(
                "state {} differs (local phase {:?}, remote {:?})",
                authoritative.index, local.phase, authoritative.phase
            ),
            Err(e) => e.to_string(),
        };
        warn!(index = authoritative.index, %mismatch, "discarding local log");
        let rules = session.game.rules();
        session.game = Game::new(rules);
        Err(DomainError::desync(mismatch))
    }

    /// Replace the local log with an authoritative move sequence.
    pub fn resync<I>(&self, moves: I) -> Result<usize, DomainError>
    where
        I: IntoIterator<Item = Move>,
    {
        let mut session = self.inner.lock();
        let game = Game::from_moves(session.game.rules(), moves)?;
        let len = game.len();
        session.game = game;
        session.last_activity = Instant::now();
        info!(len, "log resynchronized");
        Ok(len)
    }
}
