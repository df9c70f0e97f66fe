use crate::domain::cards_types::Card;
use crate::domain::declaration::{Declaration, GameType};
use crate::domain::hand::Hand;
use crate::domain::moves::Actor;
use crate::domain::rules::{defenders, Seat, FORE, MIDDLE, PLAYERS};
use crate::domain::voids::Voids;
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Game progression phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Waiting for the world actor to deal.
    Deal,
    /// The current bidder names a value or passes.
    Bid,
    /// The asked player holds ("yes") or passes.
    Answer,
    /// Winning bidder picks up the skat or declares a hand game.
    SkatOrHandDecl,
    /// Waiting for the world actor to hand over the skat.
    GetSkat,
    /// Declarer discards two cards and declares.
    DiscardAndDecl,
    /// Ten tricks of three cards.
    CardPlay,
    /// Game over: played out, all passed, resigned, timed out or left.
    Finished,
}

/// Rule switches fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRules {
    /// Only accept bids from the official ladder.
    pub strict_bids: bool,
}

impl Default for TableRules {
    fn default() -> Self {
        Self { strict_bids: true }
    }
}

/// Per-seat state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatState {
    pub hand: Hand,
    /// Cards this seat has played so far.
    pub played: Hand,
    /// Highest value this seat bid or held (0 = none yet).
    pub bid: u16,
    pub passed: bool,
    pub resigned: bool,
    pub voids: Voids,
    pub trick_points: u8,
    pub tricks_won: u8,
}

/// Full-information state after some prefix of the move log.
///
/// Values are replaced, never shared: the projection clones a state before
/// applying a move so a rejected move leaves the previous state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub rules: TableRules,
    pub phase: Phase,
    /// Actor expected to move; `None` once finished.
    pub to_move: Option<Actor>,
    pub seats: [SeatState; PLAYERS],
    /// Cards currently lying in the skat. Empty between pickup and discard.
    pub skat: Hand,
    /// The two cards dealt to the skat.
    pub dealt_skat: Option<[Card; 2]>,
    /// Seat currently naming bids.
    pub bidder: Option<Seat>,
    /// Seat currently answering bids.
    pub asked: Option<Seat>,
    pub max_bid: u16,
    pub declarer: Option<Seat>,
    pub declaration: Option<Declaration>,
    pub skat_taken: bool,
    /// Declarer's ten cards when card play began.
    pub declarer_hand_before_cardplay: Option<Hand>,
    /// Plays of the trick in progress.
    pub trick: Vec<(Seat, Card)>,
    /// Last completed trick, kept for display.
    pub last_trick: Option<Vec<(Seat, Card)>>,
    /// Completed tricks.
    pub tricks_played: u8,
    /// Declarer revealed the hand during card play.
    pub shown: bool,
    pub timed_out: Option<Seat>,
    pub left: Option<Seat>,
}

impl GameState {
    pub fn new(rules: TableRules) -> Self {
        Self {
            rules,
            phase: Phase::Deal,
            to_move: Some(Actor::World),
            seats: [SeatState::default(); PLAYERS],
            skat: Hand::EMPTY,
            dealt_skat: None,
            bidder: Some(MIDDLE),
            asked: Some(FORE),
            max_bid: 0,
            declarer: None,
            declaration: None,
            skat_taken: false,
            declarer_hand_before_cardplay: None,
            trick: Vec::with_capacity(PLAYERS),
            last_trick: None,
            tricks_played: 0,
            shown: false,
            timed_out: None,
            left: None,
        }
    }

    #[inline]
    pub fn seat(&self, seat: Seat) -> &SeatState {
        &self.seats[seat as usize % PLAYERS]
    }

    #[inline]
    pub fn seat_mut(&mut self, seat: Seat) -> &mut SeatState {
        &mut self.seats[seat as usize % PLAYERS]
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn game_type(&self) -> Option<GameType> {
        self.declaration.map(|d| d.game_type)
    }

    /// Index (0-based) of the trick being played, during card play.
    pub fn trick_no(&self) -> Option<u8> {
        (self.phase == Phase::CardPlay).then_some(self.tricks_played)
    }

    /// Card leading the current trick.
    pub fn lead_card(&self) -> Option<Card> {
        self.trick.first().map(|&(_, c)| c)
    }

    pub fn defenders(&self) -> Option<[Seat; 2]> {
        self.declarer.map(defenders)
    }

    pub fn defender_points(&self) -> u8 {
        self.defenders()
            .map(|ds| ds.iter().map(|&d| self.seat(d).trick_points).sum())
            .unwrap_or(0)
    }

    /// Every card that has been played, including the open trick.
    pub fn played_cards(&self) -> Hand {
        self.seats
            .iter()
            .fold(Hand::EMPTY, |acc, s| acc.union(s.played))
    }

    /// Hands, played cards and skat are pairwise disjoint and together form
    /// the whole deck.
    pub fn is_partition(&self) -> bool {
        if self.phase == Phase::Deal {
            return true;
        }
        let mut seen = Hand::EMPTY;
        let mut parts = vec![self.skat];
        for s in &self.seats {
            parts.push(s.hand);
            parts.push(s.played);
        }
        for part in parts {
            if !seen.is_disjoint(part) {
                return false;
            }
            seen = seen.union(part);
        }
        seen == Hand::FULL_DECK
    }

    /// Ok if `actor` is the one expected to move.
    pub(crate) fn require_turn(&self, actor: Actor, action: &str) -> Result<(), DomainError> {
        if self.to_move == Some(actor) {
            return Ok(());
        }
        let expected = match self.to_move {
            Some(a) => a.to_string(),
            None => "nobody".to_string(),
        };
        Err(DomainError::illegal(
            IllegalMoveKind::OutOfTurn,
            format!("{action}: actor {actor} is not to move (expected {expected})"),
        ))
    }

    pub(crate) fn require_declarer(&self, op: &str) -> Result<Seat, DomainError> {
        self.declarer.ok_or_else(|| {
            DomainError::illegal(
                IllegalMoveKind::PhaseMismatch,
                format!("{op}: no declarer yet"),
            )
        })
    }

    pub(crate) fn require_declaration(&self, op: &str) -> Result<Declaration, DomainError> {
        self.declaration.ok_or_else(|| {
            DomainError::illegal(
                IllegalMoveKind::PhaseMismatch,
                format!("{op}: no game declared"),
            )
        })
    }

    pub(crate) fn finish(&mut self) {
        self.phase = Phase::Finished;
        self.to_move = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(TableRules::default())
    }
}

pub(crate) fn phase_mismatch(phase: Phase, action: &str) -> DomainError {
    DomainError::illegal(
        IllegalMoveKind::PhaseMismatch,
        format!("{action} is not allowed in phase {phase:?}"),
    )
}
