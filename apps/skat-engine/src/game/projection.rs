//! `Game`: a move log plus the derived states needed to answer
//! history queries without replaying from the deal every time.
//!
//! The current state is always materialized. Older states are rebuilt from
//! the closest checkpoint at or before the requested index; checkpoints sit
//! on every bookmark and every [`CHECKPOINT_STRIDE`] moves, so a rebuild
//! replays at most a handful of moves.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::domain::cards_types::Card;
use crate::domain::hand::Hand;
use crate::domain::legal::legal_actions;
use crate::domain::moves::{ActionToken, Move};
use crate::domain::result::{game_result, GameResult};
use crate::domain::rules::{defenders, Seat};
use crate::domain::snapshot::{redacted_move, snapshot, StateSnapshot, Viewer};
use crate::domain::state::{GameState, TableRules};
use crate::domain::transitions::apply_move;
use crate::errors::domain::DomainError;
use crate::game::bookmarks::Bookmarks;
use crate::game::move_log::{parse_moves, MoveLog};

/// Longest stretch of moves without a checkpoint (bidding wars).
pub const CHECKPOINT_STRIDE: usize = 8;

#[derive(Debug, Clone)]
pub struct Game {
    rules: TableRules,
    log: MoveLog,
    bookmarks: Bookmarks,
    checkpoints: BTreeMap<usize, GameState>,
    current: GameState,
    result: Option<GameResult>,
}

impl Game {
    pub fn new(rules: TableRules) -> Self {
        let initial = GameState::new(rules);
        let mut checkpoints = BTreeMap::new();
        checkpoints.insert(0, initial.clone());
        Self {
            rules,
            log: MoveLog::new(),
            bookmarks: Bookmarks::default(),
            checkpoints,
            current: initial,
            result: None,
        }
    }

    /// Build a game from a recorded sequence. The first move that does not
    /// apply stops the load and is reported with its position.
    pub fn from_moves<I>(rules: TableRules, moves: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Move>,
    {
        let mut game = Self::new(rules);
        for mv in moves {
            let index = game.len();
            game.append(mv)
                .map_err(|e| DomainError::malformed(index, format!("'{mv}': {e}")))?;
        }
        Ok(game)
    }

    /// Load one game from its text form. Returns the game built from the
    /// longest valid prefix, and the error that cut it short, if any.
    pub fn load(rules: TableRules, text: &str) -> (Self, Option<DomainError>) {
        let parsed = parse_moves(text);
        let mut game = Self::new(rules);
        for mv in parsed.moves {
            let index = game.len();
            if let Err(e) = game.append(mv) {
                let err = DomainError::malformed(index, format!("'{mv}': {e}"));
                warn!(index, error = %err, "log replay stopped");
                return (game, Some(err));
            }
        }
        if let Some(err) = &parsed.error {
            warn!(error = %err, "log parsing stopped");
        }
        (game, parsed.error)
    }

    pub fn rules(&self) -> TableRules {
        self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn moves(&self) -> &[Move] {
        self.log.moves()
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    /// State after every recorded move.
    pub fn current(&self) -> &GameState {
        &self.current
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_finished()
    }

    /// Validate and record `mv`. Returns the new log length.
    pub fn append(&mut self, mv: Move) -> Result<usize, DomainError> {
        let next = apply_move(&self.current, &mv)?;
        self.log.push(mv);
        let index = self.log.len();
        let boundary = self.bookmarks.record(index, &self.current, &next);
        if boundary || index % CHECKPOINT_STRIDE == 0 {
            self.checkpoints.insert(index, next.clone());
        }
        debug!(index, mv = %mv, phase = ?next.phase, "move appended");
        if next.is_finished() {
            self.result = game_result(&next);
        }
        self.current = next;
        Ok(index)
    }

    /// A defender's resignation counts for the whole defending side: the
    /// partner's resignation is recorded right after it.
    pub fn concede(&mut self, seat: Seat) -> Result<usize, DomainError> {
        let index = self.append(Move::seat(seat, ActionToken::Resign))?;
        let Some(declarer) = self.current.declarer else {
            return Ok(index);
        };
        if seat == declarer || self.is_finished() {
            return Ok(index);
        }
        let partner = defenders(declarer)
            .into_iter()
            .find(|&d| d != seat && !self.current.seat(d).resigned);
        match partner {
            Some(p) => self.append(Move::seat(p, ActionToken::Resign)),
            None => Ok(index),
        }
    }

    /// Keep the first `len` moves and forget everything derived from the
    /// rest.
    pub fn prune(&mut self, len: usize) -> Result<(), DomainError> {
        if len >= self.log.len() {
            return Ok(());
        }
        // rebuild before touching anything so a failure leaves the game as is
        let state = self.replay_from_checkpoint(len)?;
        self.log.truncate(len);
        self.bookmarks.truncate(len);
        self.checkpoints.retain(|&k, _| k <= len);
        self.checkpoints.insert(len, state.clone());
        self.result = game_result(&state);
        self.current = state;
        debug!(len, "log pruned");
        Ok(())
    }

    /// Full-information state after the first `index` moves.
    pub fn state_at(&self, index: usize) -> Result<GameState, DomainError> {
        if index > self.log.len() {
            return Err(DomainError::not_found(format!(
                "state {index} of a {}-move game",
                self.log.len()
            )));
        }
        if index == self.log.len() {
            return Ok(self.current.clone());
        }
        self.replay_from_checkpoint(index)
    }

    fn replay_from_checkpoint(&self, index: usize) -> Result<GameState, DomainError> {
        let (&base, state) = self
            .checkpoints
            .range(..=index)
            .next_back()
            .ok_or_else(|| DomainError::not_found(format!("no checkpoint before {index}")))?;
        let mut state = state.clone();
        for (i, mv) in self.log.moves()[base..index].iter().enumerate() {
            state = apply_move(&state, mv)
                .map_err(|e| DomainError::malformed(base + i, e.to_string()))?;
        }
        Ok(state)
    }

    /// Replay from the deal, ignoring checkpoints.
    pub fn replay_naive(&self, index: usize) -> Result<GameState, DomainError> {
        let mut state = GameState::new(self.rules);
        for (i, mv) in self.log.moves().iter().take(index).enumerate() {
            state = apply_move(&state, mv).map_err(|e| DomainError::malformed(i, e.to_string()))?;
        }
        Ok(state)
    }

    pub fn snapshot_at(&self, index: usize, viewer: Viewer) -> Result<StateSnapshot, DomainError> {
        Ok(snapshot(&self.state_at(index)?, index, viewer))
    }

    pub fn latest(&self, viewer: Viewer) -> StateSnapshot {
        snapshot(&self.current, self.log.len(), viewer)
    }

    /// The move log as `viewer` received it, one text line per move.
    pub fn log_for(&self, viewer: Viewer) -> Vec<String> {
        let declarer = self.current.declarer;
        self.log
            .iter()
            .map(|mv| redacted_move(mv, declarer, viewer))
            .collect()
    }

    /// Result of the finished game.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn legal_actions_at(&self, index: usize) -> Result<Vec<ActionToken>, DomainError> {
        Ok(legal_actions(&self.state_at(index)?))
    }

    /// Completed tricks.
    pub fn num_tricks(&self) -> usize {
        self.bookmarks.completed_tricks()
    }

    /// State at the start of trick `trick` (0-based).
    pub fn state_prior_to_trick(&self, trick: usize) -> Option<GameState> {
        let index = self.bookmarks.trick_start(trick)?;
        self.state_at(index).ok()
    }

    pub fn hand_prior_to_trick(&self, seat: Seat, trick: usize) -> Option<Hand> {
        self.state_prior_to_trick(trick).map(|s| s.seat(seat).hand)
    }

    pub fn played_cards_prior_to_trick(&self, seat: Seat, trick: usize) -> Option<Hand> {
        self.state_prior_to_trick(trick).map(|s| s.seat(seat).played)
    }

    /// The three plays of completed trick `trick`, in play order.
    pub fn trick(&self, trick: usize) -> Option<Vec<(Seat, Card)>> {
        let index = self.bookmarks.trick_end(trick)?;
        self.state_at(index).ok()?.last_trick
    }

    pub fn original_skat(&self) -> Option<[Card; 2]> {
        self.current.dealt_skat
    }

    /// Cards dealt to `seat`.
    pub fn initial_hand(&self, seat: Seat) -> Option<Hand> {
        let index = self.bookmarks.bidding?;
        self.state_at(index).ok().map(|s| s.seat(seat).hand)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(TableRules::default())
    }
}
