use crate::domain::fixtures::{clubs_hand_declared, fore_wins_bidding, moves, mv, replay};
use crate::domain::legal::{declarations, legal_actions};
use crate::domain::moves::ActionToken;
use crate::domain::state::GameState;
use crate::domain::transitions::apply_move;

#[test]
fn nothing_is_legal_before_the_deal_or_after_the_end() {
    assert!(legal_actions(&GameState::default()).is_empty());
    let mut all = fore_wins_bidding();
    all.push(mv("w LE.2"));
    assert!(legal_actions(&replay(&all)).is_empty());
}

#[test]
fn bidder_may_bid_the_next_step_or_pass() {
    let state = replay(&[mv(&crate::domain::fixtures::deal_line())]);
    assert_eq!(
        legal_actions(&state),
        vec![ActionToken::Bid(18), ActionToken::Pass]
    );
}

#[test]
fn hand_declarations_are_complete() {
    // per suit game: plain, schneider, schwarz, ouvert; per null: plain, ouvert
    assert_eq!(declarations(true).len(), 5 * 4 + 2);
    assert_eq!(declarations(false).len(), 5 + 2);
    assert!(declarations(false).iter().all(|d| !d.hand));
}

#[test]
fn skat_or_hand_offers_pickup_and_hand_games() {
    let state = replay(&fore_wins_bidding());
    let actions = legal_actions(&state);
    assert_eq!(actions[0], ActionToken::Pickup);
    assert_eq!(actions.len(), 1 + 22);
}

#[test]
fn discard_offers_every_pair() {
    let mut all = fore_wins_bidding();
    all.extend(moves(&["0 s", "w C7.D7"]));
    let state = replay(&all);
    let actions = legal_actions(&state);
    // 12 choose 2 pairs for each of 7 declarations
    assert_eq!(actions.len(), 66 * 7);
    for action in actions.iter().step_by(37) {
        assert!(apply_move(&state, &crate::domain::moves::Move::seat(0, *action)).is_ok());
    }
}

#[test]
fn card_play_lists_legal_cards() {
    let mut all = clubs_hand_declared();
    all.push(mv("0 CJ"));
    let state = replay(&all);
    let actions = legal_actions(&state);
    assert_eq!(actions.len(), 10);
    assert!(actions.iter().all(|a| matches!(a, ActionToken::Play(_))));
}
