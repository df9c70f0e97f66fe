//! Game value of a finished game.
//!
//! Suit and grand games: `base * (matadors + 1 + hand + ouvert + schneider +
//! schneider announced + schwarz + schwarz announced)`. Null games use the
//! fixed table in [`NULL_VALUES`](crate::domain::declaration::NULL_VALUES).
//! Lost games count double. A game worth less than the bid is an overbid and
//! is lost at twice the smallest multiple of the base value reaching the bid.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::cards_logic::matadors;
use crate::domain::declaration::Declaration;
use crate::domain::hand::Hand;
use crate::domain::rules::{
    Seat, PLAYERS, SCHNEIDER_LOSS_POINTS, SCHNEIDER_POINTS, TRICKS, WIN_POINTS,
};
use crate::domain::state::GameState;

const DECK_POINTS: u8 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub declarer: Option<Seat>,
    pub declaration: Option<Declaration>,
    /// Signed score for the declarer.
    pub decl_value: i32,
    /// Base value of the declared game (null: the fixed table value).
    pub base_value: u16,
    /// Positive "with", negative "against".
    pub matadors: i32,
    pub schneider: bool,
    pub schwarz: bool,
    pub decl_card_points: u8,
    pub decl_tricks: u8,
    pub max_bid: u16,
    pub won: bool,
    pub overbid: bool,
    pub passed: bool,
    /// Declarer or both defenders resigned.
    pub resigned: bool,
    pub left: Option<Seat>,
    pub timed_out: Option<Seat>,
    /// Penalty marks per seat for leaving or timing out.
    pub penalties: [u8; PLAYERS],
}

impl GameResult {
    fn empty(state: &GameState) -> Self {
        Self {
            declarer: state.declarer,
            declaration: state.declaration,
            decl_value: 0,
            base_value: 0,
            matadors: 0,
            schneider: false,
            schwarz: false,
            decl_card_points: 0,
            decl_tricks: 0,
            max_bid: state.max_bid,
            won: false,
            overbid: false,
            passed: false,
            resigned: false,
            left: state.left,
            timed_out: state.timed_out,
            penalties: [0; PLAYERS],
        }
    }

    /// A finished game without a declared contract that was ended by a
    /// timeout or departure.
    pub fn is_penalty_only(&self) -> bool {
        self.declaration.is_none() && self.penalties.iter().any(|&p| p > 0)
    }
}

/// Result of a finished game; `None` while the game is still running.
pub fn game_result(state: &GameState) -> Option<GameResult> {
    if !state.is_finished() {
        return None;
    }
    let mut gr = GameResult::empty(state);
    let culprit = state.timed_out.or(state.left);
    if let Some(c) = culprit {
        gr.penalties[c as usize % PLAYERS] = 1;
    }

    let (Some(decl), Some(declarer)) = (state.declaration, state.declarer) else {
        gr.passed = culprit.is_none();
        return Some(gr);
    };

    let declarer_seat = state.seat(declarer);
    let skat_points = state.skat.points();
    let mut points = declarer_seat.trick_points + skat_points;
    let mut decl_tricks = declarer_seat.tricks_won;

    let defenders_resigned = state
        .defenders()
        .map(|ds| ds.iter().all(|&d| state.seat(d).resigned))
        .unwrap_or(false);
    let decl_instant_loss = declarer_seat.resigned || culprit == Some(declarer);
    let defs_instant_loss = !decl_instant_loss && (defenders_resigned || culprit.is_some());
    gr.resigned = declarer_seat.resigned || defenders_resigned;

    // conceding defenders hand the declarer everything still out
    if defenders_resigned && !decl_instant_loss && !decl.game_type.is_null() {
        let remaining = DECK_POINTS - points - state.defender_points();
        points += remaining;
        decl_tricks += TRICKS - state.tricks_played;
    }

    gr.decl_card_points = points;
    gr.decl_tricks = decl_tricks;

    let forced = if decl_instant_loss {
        Some(false)
    } else if defs_instant_loss {
        Some(true)
    } else {
        None
    };

    let cards = state
        .declarer_hand_before_cardplay
        .unwrap_or(Hand::EMPTY)
        .union(state.skat);
    score_declaration(
        &mut gr,
        &decl,
        cards,
        points,
        decl_tricks,
        state.tricks_played,
        forced,
    );

    info!(
        declarer,
        declaration = %decl,
        value = gr.decl_value,
        points,
        overbid = gr.overbid,
        "game result"
    );
    Some(gr)
}

/// Fill value fields of `gr`. `forced` overrides the contract check
/// (instant win or loss after resignations, timeouts and departures).
pub fn score_declaration(
    gr: &mut GameResult,
    decl: &Declaration,
    cards: Hand,
    points: u8,
    decl_tricks: u8,
    all_tricks: u8,
    forced: Option<bool>,
) {
    let bid = i32::from(gr.max_bid);
    gr.overbid = false;
    gr.schneider = false;
    gr.schwarz = false;
    gr.matadors = 0;
    gr.base_value = decl.base_value();

    if let Some(v) = decl.null_value() {
        let v = i32::from(v);
        gr.won = forced.unwrap_or(decl_tricks == 0);
        gr.decl_value = if gr.won { v } else { -2 * v };
        return;
    }

    let bv = i32::from(decl.base_value());
    gr.matadors = matadors(cards, decl.game_type);
    let mut m = gr.matadors.abs() + 1;

    let contract = if decl.schwarz_announced {
        decl_tricks == TRICKS
    } else if decl.schneider_announced {
        points >= SCHNEIDER_POINTS
    } else {
        points >= WIN_POINTS
    };
    gr.won = forced.unwrap_or(contract);

    for flag in [
        decl.hand,
        decl.schneider_announced,
        decl.schwarz_announced,
        decl.ouvert,
    ] {
        m += i32::from(flag);
    }

    if gr.won {
        if points >= SCHNEIDER_POINTS {
            m += 1;
            gr.schneider = true;
        }
        if decl_tricks == TRICKS {
            m += 1;
            gr.schneider = true;
            gr.schwarz = true;
        }
        if m * bv >= bid {
            gr.decl_value = m * bv;
            return;
        }
    } else {
        // no schneider/schwarz against a declarer who gave up before the first trick
        if !decl.schneider_announced && all_tricks >= 1 && points <= SCHNEIDER_LOSS_POINTS {
            m += 1;
            gr.schneider = true;
        }
        if !decl.schwarz_announced && all_tricks >= 1 && decl_tricks == 0 {
            m += 1;
            gr.schneider = true;
            gr.schwarz = true;
        }
        if m * bv >= bid {
            gr.decl_value = -2 * m * bv;
            return;
        }
    }

    gr.overbid = true;
    gr.won = false;
    let needed = (bid + bv - 1) / bv * bv;
    gr.decl_value = -2 * needed;
}
