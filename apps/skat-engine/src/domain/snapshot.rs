//! Immutable, viewer-specific snapshots of a game state.
//!
//! Renderers and network peers only ever see these values; the full
//! [`GameState`] stays inside the engine.

use serde::{Deserialize, Serialize};

use crate::domain::cards_parsing::format_card_slot;
use crate::domain::cards_types::Card;
use crate::domain::declaration::Declaration;
use crate::domain::hand::Hand;
use crate::domain::moves::{ActionToken, Actor, Move};
use crate::domain::rules::{Seat, PLAYERS};
use crate::domain::state::{GameState, Phase};
use crate::domain::voids::Voids;

/// Whose information the snapshot is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "seat")]
pub enum Viewer {
    /// Sees every card (server, replay, kibitzer after the game).
    World,
    Player(Seat),
    /// Sees only what is on the table.
    Public,
}

impl Viewer {
    /// Whether the private cards of `seat` are visible.
    pub fn sees_seat(self, seat: Seat) -> bool {
        match self {
            Viewer::World => true,
            Viewer::Player(p) => p == seat,
            Viewer::Public => false,
        }
    }
}

/// A set of cards as seen by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "visibility", content = "cards")]
pub enum HandView {
    Known(Hand),
    Hidden { count: u8 },
}

impl HandView {
    pub fn known(self) -> Option<Hand> {
        match self {
            HandView::Known(h) => Some(h),
            HandView::Hidden { .. } => None,
        }
    }

    pub fn count(self) -> u8 {
        match self {
            HandView::Known(h) => h.count(),
            HandView::Hidden { count } => count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub hand: HandView,
    pub played: Hand,
    pub bid: u16,
    pub passed: bool,
    pub resigned: bool,
    pub voids: Voids,
    pub trick_points: u8,
    pub tricks_won: u8,
}

/// Derived state after the first `index` moves of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Number of moves applied.
    pub index: usize,
    pub viewer: Viewer,
    pub phase: Phase,
    pub to_move: Option<Actor>,
    pub seats: [SeatSnapshot; PLAYERS],
    pub skat: HandView,
    pub declarer: Option<Seat>,
    pub declaration: Option<Declaration>,
    pub bidder: Option<Seat>,
    pub asked: Option<Seat>,
    pub max_bid: u16,
    /// Declarer picked up the skat (and so knows the cards put back).
    pub skat_taken: bool,
    pub trick_no: Option<u8>,
    pub current_trick: Vec<(Seat, Card)>,
    pub last_trick: Option<Vec<(Seat, Card)>>,
    pub shown: bool,
    pub left: Option<Seat>,
    pub timed_out: Option<Seat>,
}

impl StateSnapshot {
    pub fn hand(&self, seat: Seat) -> HandView {
        self.seats[seat as usize % PLAYERS].hand
    }

    pub fn voids(&self) -> [Voids; PLAYERS] {
        [self.seats[0].voids, self.seats[1].voids, self.seats[2].voids]
    }

    pub fn trick_points(&self) -> [u8; PLAYERS] {
        [
            self.seats[0].trick_points,
            self.seats[1].trick_points,
            self.seats[2].trick_points,
        ]
    }

    pub fn resigned(&self) -> [bool; PLAYERS] {
        [
            self.seats[0].resigned,
            self.seats[1].resigned,
            self.seats[2].resigned,
        ]
    }

    /// Same state seen by a more restricted viewer. Masking only ever hides.
    pub fn restricted_to(&self, viewer: Viewer) -> StateSnapshot {
        let mut out = self.clone();
        out.viewer = viewer;
        for (seat, s) in out.seats.iter_mut().enumerate() {
            if !self.hand_visible(viewer, seat as Seat) {
                s.hand = HandView::Hidden {
                    count: s.hand.count(),
                };
            }
        }
        if !self.skat_visible(viewer) {
            out.skat = HandView::Hidden {
                count: self.skat.count(),
            };
        }
        out
    }

    fn declarer_open(&self) -> bool {
        self.shown || self.declaration.is_some_and(|d| d.ouvert)
    }

    fn hand_visible(&self, viewer: Viewer, seat: Seat) -> bool {
        viewer.sees_seat(seat) || (self.declarer == Some(seat) && self.declarer_open())
    }

    fn skat_visible(&self, viewer: Viewer) -> bool {
        match viewer {
            Viewer::World => true,
            Viewer::Player(p) => self.declarer == Some(p) && self.skat_taken,
            Viewer::Public => false,
        }
    }
}

fn seat_snapshot(state: &GameState, seat: Seat) -> SeatSnapshot {
    let s = state.seat(seat);
    SeatSnapshot {
        hand: HandView::Known(s.hand),
        played: s.played,
        bid: s.bid,
        passed: s.passed,
        resigned: s.resigned,
        voids: s.voids,
        trick_points: s.trick_points,
        tricks_won: s.tricks_won,
    }
}

/// Build the snapshot of `state` (reached after `index` moves) for `viewer`.
pub fn snapshot(state: &GameState, index: usize, viewer: Viewer) -> StateSnapshot {
    let world = StateSnapshot {
        index,
        viewer: Viewer::World,
        phase: state.phase,
        to_move: state.to_move,
        seats: [
            seat_snapshot(state, 0),
            seat_snapshot(state, 1),
            seat_snapshot(state, 2),
        ],
        skat: HandView::Known(state.skat),
        declarer: state.declarer,
        declaration: state.declaration,
        bidder: state.bidder,
        asked: state.asked,
        max_bid: state.max_bid,
        skat_taken: state.skat_taken,
        trick_no: state.trick_no(),
        current_trick: state.trick.clone(),
        last_trick: state.last_trick.clone(),
        shown: state.shown,
        left: state.left,
        timed_out: state.timed_out,
    };
    match viewer {
        Viewer::World => world,
        other => world.restricted_to(other),
    }
}

fn card_slots(cards: &[Card], visible: bool) -> String {
    cards
        .iter()
        .map(|&c| format_card_slot(visible.then_some(c)))
        .collect::<Vec<_>>()
        .join(".")
}

/// Text form of `mv` as `viewer` would have received it, with every card
/// the viewer cannot see written as `??`. `declarer` is the seat that
/// won the bidding, if any: only it (and the world) sees the picked-up skat
/// and the discard.
pub fn redacted_move(mv: &Move, declarer: Option<Seat>, viewer: Viewer) -> String {
    match mv.action {
        ActionToken::Deal { hands, skat } => {
            let hands: Vec<String> = (0..)
                .zip(hands.iter())
                .map(|(seat, h)| card_slots(&h.to_list(), viewer.sees_seat(seat)))
                .collect();
            format!(
                "{} {}|{}",
                mv.actor,
                hands.join("|"),
                card_slots(&skat, viewer == Viewer::World)
            )
        }
        ActionToken::SkatCards(cards) => {
            let visible = declarer.is_some_and(|d| viewer.sees_seat(d));
            format!("{} {}", mv.actor, card_slots(&cards, visible))
        }
        ActionToken::DiscardAndDeclare {
            declaration,
            discard,
        } => {
            let visible = matches!(mv.actor, Actor::Seat(s) if viewer.sees_seat(s));
            format!("{} {declaration}.{}", mv.actor, card_slots(&discard, visible))
        }
        _ => mv.to_string(),
    }
}
