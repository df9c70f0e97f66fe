use crate::domain::bidding::{is_valid_bid, lowest_next_bid};
use crate::domain::fixtures::{deal_line, mv, replay};
use crate::domain::moves::{Actor, Move};
use crate::domain::rules::{FORE, MIDDLE, REAR};
use crate::domain::state::{GameState, Phase, TableRules};
use crate::domain::transitions::apply_move;
use crate::errors::domain::IllegalMoveKind;

fn after(lines: &[&str]) -> GameState {
    let mut all = vec![mv(&deal_line())];
    all.extend(lines.iter().map(|l| mv(l)));
    replay(&all)
}

#[test]
fn deal_hands_the_first_bid_to_middle() {
    let state = after(&[]);
    assert_eq!(state.phase, Phase::Bid);
    assert_eq!(state.to_move, Some(Actor::Seat(MIDDLE)));
    assert_eq!(state.bidder, Some(MIDDLE));
    assert_eq!(state.asked, Some(FORE));
    assert_eq!(lowest_next_bid(&state), Some(18));
}

#[test]
fn bid_goes_to_the_asked_player() {
    let state = after(&["1 18"]);
    assert_eq!(state.phase, Phase::Answer);
    assert_eq!(state.to_move, Some(Actor::Seat(FORE)));
    assert_eq!(state.max_bid, 18);

    let state = after(&["1 18", "0 y"]);
    assert_eq!(state.phase, Phase::Bid);
    assert_eq!(state.to_move, Some(Actor::Seat(MIDDLE)));
    assert_eq!(state.seat(FORE).bid, 18);
    assert_eq!(lowest_next_bid(&state), Some(20));
}

#[test]
fn fore_passing_sends_rear_against_middle() {
    let state = after(&["1 18", "0 p"]);
    assert_eq!(state.phase, Phase::Bid);
    assert_eq!(state.bidder, Some(REAR));
    assert_eq!(state.asked, Some(MIDDLE));
    assert_eq!(state.to_move, Some(Actor::Seat(REAR)));

    // rear passes: middle keeps the 18
    let state = after(&["1 18", "0 p", "2 p"]);
    assert_eq!(state.phase, Phase::SkatOrHandDecl);
    assert_eq!(state.declarer, Some(MIDDLE));
    assert_eq!(state.to_move, Some(Actor::Seat(MIDDLE)));
}

#[test]
fn rear_outbids_middle() {
    let state = after(&["1 18", "0 p", "2 20", "1 y", "2 22", "1 p"]);
    assert_eq!(state.phase, Phase::SkatOrHandDecl);
    assert_eq!(state.declarer, Some(REAR));
    assert_eq!(state.max_bid, 22);
}

#[test]
fn fore_may_open_after_two_passes() {
    let state = after(&["1 p", "2 p"]);
    assert_eq!(state.bidder, Some(FORE));
    assert_eq!(state.to_move, Some(Actor::Seat(FORE)));

    let state = after(&["1 p", "2 p", "0 18"]);
    assert_eq!(state.phase, Phase::SkatOrHandDecl);
    assert_eq!(state.declarer, Some(FORE));
}

#[test]
fn three_passes_finish_the_game() {
    let state = after(&["1 p", "2 p", "0 p"]);
    assert!(state.is_finished());
    assert_eq!(state.declarer, None);
    assert!(state.seats.iter().all(|s| s.passed));
}

#[test]
fn bids_must_climb_the_ladder() {
    let state = after(&["1 18", "0 y"]);
    for bad in ["1 18", "1 17", "1 19", "1 500"] {
        let err = apply_move(&state, &mv(bad)).unwrap_err();
        assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::InvalidBid), "{bad}");
    }
    assert!(apply_move(&state, &mv("1 20")).is_ok());
    assert!(apply_move(&state, &mv("1 264")).is_ok());
}

#[test]
fn relaxed_table_accepts_off_ladder_bids() {
    let mut state = GameState::new(TableRules { strict_bids: false });
    state = apply_move(&state, &mv(&deal_line())).unwrap();
    assert!(is_valid_bid(&state, 19));
    assert!(!is_valid_bid(&state, 17));
    let state = apply_move(&state, &mv("1 19")).unwrap();
    assert_eq!(state.max_bid, 19);
}

#[test]
fn out_of_turn_bid_is_rejected() {
    let state = after(&[]);
    let err = apply_move(&state, &mv("2 18")).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::OutOfTurn));
    let err = apply_move(&state, &mv("1 y")).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::PhaseMismatch));
}

#[test]
fn moves_before_the_deal_are_rejected() {
    let state = GameState::default();
    let err = apply_move(&state, &Move::seat(MIDDLE, crate::domain::moves::ActionToken::Bid(18)))
        .unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::OutOfTurn));
}
