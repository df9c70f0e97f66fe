//! Scripted deals and move sequences for tests.
//!
//! The standard deal gives fore hand all four jacks and six clubs; middle
//! holds the spades and the high hearts, rear the low hearts and the
//! diamonds. C7 and D7 lie in the skat.

#![allow(clippy::expect_used)]

use crate::domain::hand::Hand;
use crate::domain::moves::Move;
use crate::domain::state::{GameState, TableRules};
use crate::domain::transitions::apply_move;
use crate::game::projection::Game;

pub const FORE_HAND: &str = "CJ.SJ.HJ.DJ.CA.CT.CK.CQ.C9.C8";
pub const MIDDLE_HAND: &str = "SA.ST.SK.SQ.S9.S8.S7.HA.HT.HK";
pub const REAR_HAND: &str = "HQ.H9.H8.H7.DA.DT.DK.DQ.D9.D8";
pub const SKAT: &str = "C7.D7";

pub fn deal_line() -> String {
    format!("w {FORE_HAND}|{MIDDLE_HAND}|{REAR_HAND}|{SKAT}")
}

pub fn hand(tokens: &str) -> Hand {
    tokens.parse().expect("hardcoded valid hand")
}

pub fn mv(line: &str) -> Move {
    line.parse().expect("hardcoded valid move")
}

pub fn moves(lines: &[&str]) -> Vec<Move> {
    lines.iter().map(|l| mv(l)).collect()
}

/// Deal, then middle bids 18, fore holds, middle and rear pass.
pub fn fore_wins_bidding() -> Vec<Move> {
    let mut out = vec![mv(&deal_line())];
    out.extend(moves(&["1 18", "0 y", "1 p", "2 p"]));
    out
}

/// Card play of the clubs hand game: fore draws every trump and takes all
/// ten tricks.
pub const CLUBS_SWEEP: [&str; 30] = [
    "0 CJ", "1 S7", "2 D8", //
    "0 SJ", "1 S8", "2 D9", //
    "0 HJ", "1 S9", "2 DQ", //
    "0 DJ", "1 SQ", "2 DK", //
    "0 CA", "1 SK", "2 DT", //
    "0 CT", "1 ST", "2 DA", //
    "0 CK", "1 SA", "2 H7", //
    "0 CQ", "1 HK", "2 H8", //
    "0 C9", "1 HT", "2 H9", //
    "0 C8", "1 HA", "2 HQ", //
];

/// Fore declares a clubs hand game; no card played yet.
pub fn clubs_hand_declared() -> Vec<Move> {
    let mut out = fore_wins_bidding();
    out.push(mv("0 CH"));
    out
}

/// The complete clubs hand game.
pub fn clubs_hand_sweep() -> Vec<Move> {
    let mut out = clubs_hand_declared();
    out.extend(moves(&CLUBS_SWEEP));
    out
}

/// Deal and three passes.
pub fn all_pass() -> Vec<Move> {
    let mut out = vec![mv(&deal_line())];
    out.extend(moves(&["1 p", "2 p", "0 p"]));
    out
}

/// Fore plays null hand and takes the first trick with the only club.
pub fn null_hand_lost() -> Vec<Move> {
    let mut out = fore_wins_bidding();
    out.extend(moves(&["0 NH", "0 CJ", "1 S7", "2 D8"]));
    out
}

pub fn replay(moves: &[Move]) -> GameState {
    moves
        .iter()
        .fold(GameState::new(TableRules::default()), |state, m| {
            apply_move(&state, m).expect("scripted move applies")
        })
}

pub fn game_of(moves: &[Move]) -> Game {
    Game::from_moves(TableRules::default(), moves.iter().copied()).expect("scripted game loads")
}
