use crate::domain::declaration::Declaration;
use crate::domain::fixtures::{
    all_pass, clubs_hand_declared, clubs_hand_sweep, deal_line, hand, moves, mv,
    null_hand_lost, replay,
};
use crate::domain::result::{game_result, score_declaration, GameResult};
use crate::domain::rules::{FORE, MIDDLE};

fn blank_result(max_bid: u16) -> GameResult {
    GameResult {
        declarer: Some(FORE),
        declaration: None,
        decl_value: 0,
        base_value: 0,
        matadors: 0,
        schneider: false,
        schwarz: false,
        decl_card_points: 0,
        decl_tricks: 0,
        max_bid,
        won: false,
        overbid: false,
        passed: false,
        resigned: false,
        left: None,
        timed_out: None,
        penalties: [0; 3],
    }
}

fn decl(token: &str) -> Declaration {
    token.parse().unwrap()
}

/// Declarer cards: the given jacks plus low clubs and some side cards.
fn cards(jacks: &str) -> crate::domain::hand::Hand {
    let mut tokens = vec!["C8", "C9", "HA", "HT", "SA", "ST", "DK", "DQ"];
    tokens.extend(jacks.split('.').filter(|t| !t.is_empty()));
    hand(&tokens.join("."))
}

#[test]
fn clubs_with_two_is_worth_36() {
    let mut gr = blank_result(18);
    score_declaration(&mut gr, &decl("C"), cards("CJ.SJ"), 70, 6, 10, None);
    assert_eq!(gr.matadors, 2);
    assert!(gr.won);
    assert_eq!(gr.decl_value, 36);
    assert_eq!(gr.base_value, 12);
}

#[test]
fn clubs_against_two_is_also_worth_36() {
    let mut gr = blank_result(18);
    score_declaration(&mut gr, &decl("C"), cards("HJ.DJ"), 61, 5, 10, None);
    assert_eq!(gr.matadors, -2);
    assert_eq!(gr.decl_value, 36);
}

#[test]
fn lost_game_counts_double() {
    let mut gr = blank_result(18);
    score_declaration(&mut gr, &decl("C"), cards("CJ"), 60, 5, 10, None);
    assert!(!gr.won);
    assert!(!gr.overbid);
    assert_eq!(gr.decl_value, -48);
}

#[test]
fn overbid_is_lost_at_the_next_multiple() {
    let mut gr = blank_result(30);
    score_declaration(&mut gr, &decl("C"), cards("CJ"), 80, 7, 10, None);
    assert!(gr.overbid);
    assert!(!gr.won);
    // ceil(30 / 12) * 12 = 36, doubled
    assert_eq!(gr.decl_value, -72);
}

#[test]
fn grand_hand_schneider() {
    let mut gr = blank_result(18);
    score_declaration(&mut gr, &decl("GH"), cards("CJ.SJ.HJ.DJ"), 95, 8, 10, None);
    assert_eq!(gr.matadors, 4);
    assert!(gr.schneider);
    assert!(!gr.schwarz);
    // (4 + 1 + hand + schneider) * 24
    assert_eq!(gr.decl_value, 7 * 24);
}

#[test]
fn lost_game_picks_up_schneider_against_the_declarer() {
    let mut gr = blank_result(18);
    score_declaration(&mut gr, &decl("C"), cards("CJ"), 25, 2, 10, None);
    assert!(gr.schneider);
    assert!(!gr.schwarz);
    assert_eq!(gr.decl_value, -2 * 3 * 12);
}

#[test]
fn null_values_ignore_card_points() {
    for (token, won_value) in [("N", 23), ("NH", 35), ("NO", 46), ("NOH", 59)] {
        let mut gr = blank_result(18);
        score_declaration(&mut gr, &decl(token), cards(""), 0, 0, 10, None);
        assert!(gr.won);
        assert_eq!(gr.decl_value, won_value, "{token}");

        let mut gr = blank_result(18);
        score_declaration(&mut gr, &decl(token), cards(""), 3, 1, 1, None);
        assert!(!gr.won);
        assert_eq!(gr.decl_value, -2 * won_value, "{token}");
    }
}

#[test]
fn running_game_has_no_result() {
    let state = replay(&clubs_hand_declared());
    assert!(game_result(&state).is_none());
}

#[test]
fn sweep_is_schneider_schwarz() {
    let gr = game_result(&replay(&clubs_hand_sweep())).unwrap();
    assert!(gr.won);
    assert!(gr.schneider && gr.schwarz);
    assert_eq!(gr.decl_card_points, 120);
    assert_eq!(gr.decl_tricks, 10);
    // the skat's C7 makes it with eleven
    assert_eq!(gr.matadors, 11);
    assert_eq!(gr.decl_value, (11 + 1 + 1 + 1 + 1) * 12);
}

#[test]
fn null_hand_loss_uses_the_table() {
    let gr = game_result(&replay(&null_hand_lost())).unwrap();
    assert!(!gr.won);
    assert_eq!(gr.decl_value, -70);
    assert_eq!(gr.base_value, 35);
}

#[test]
fn all_passed() {
    let gr = game_result(&replay(&all_pass())).unwrap();
    assert!(gr.passed);
    assert_eq!(gr.declarer, None);
    assert_eq!(gr.decl_value, 0);
    assert!(!gr.is_penalty_only());
}

#[test]
fn defenders_resigning_hand_over_the_rest() {
    let mut all = clubs_hand_declared();
    all.extend(moves(&["0 CJ", "1 S7", "2 D8", "1 RE", "2 RE"]));
    let gr = game_result(&replay(&all)).unwrap();
    assert!(gr.resigned);
    assert!(gr.won);
    assert_eq!(gr.decl_card_points, 120);
    assert_eq!(gr.decl_tricks, 10);
    assert_eq!(gr.decl_value, 180);
}

#[test]
fn declarer_resigning_loses() {
    let mut all = clubs_hand_declared();
    all.extend(moves(&["0 CJ", "1 S7", "2 D8", "0 RE"]));
    let gr = game_result(&replay(&all)).unwrap();
    assert!(gr.resigned);
    assert!(!gr.won);
    assert_eq!(gr.decl_card_points, 2);
    // (11 + 1 + hand + schneider) * 12, doubled
    assert_eq!(gr.decl_value, -2 * 14 * 12);
}

#[test]
fn defender_timeout_wins_for_the_declarer_without_points() {
    let mut all = clubs_hand_declared();
    all.extend(moves(&["0 CJ", "w TI.1"]));
    let gr = game_result(&replay(&all)).unwrap();
    assert!(gr.won);
    assert_eq!(gr.decl_card_points, 0);
    assert_eq!(gr.timed_out, Some(MIDDLE));
    assert_eq!(gr.penalties, [0, 1, 0]);
    assert_eq!(gr.decl_value, 13 * 12);
}

#[test]
fn timeout_during_bidding_is_penalty_only() {
    let all = vec![mv(&deal_line()), mv("1 18"), mv("w TI.0")];
    let gr = game_result(&replay(&all)).unwrap();
    assert!(!gr.passed);
    assert!(gr.is_penalty_only());
    assert_eq!(gr.penalties, [1, 0, 0]);
    assert_eq!(gr.decl_value, 0);
}
