use proptest::prelude::*;

use crate::domain::cards_types::Suit;
use crate::domain::fixtures::{
    all_pass, clubs_hand_declared, clubs_hand_sweep, game_of, hand, mv, FORE_HAND, MIDDLE_HAND,
    SKAT,
};
use crate::domain::hand::Hand;
use crate::domain::rules::{FORE, MIDDLE, REAR};
use crate::domain::snapshot::Viewer;
use crate::domain::state::{Phase, TableRules};
use crate::domain::test_gens;
use crate::errors::domain::{DomainError, IllegalMoveKind};
use crate::game::projection::Game;

#[test]
fn bookmarks_follow_the_phases() {
    let game = game_of(&clubs_hand_sweep());
    let b = game.bookmarks();
    assert_eq!(b.bidding, Some(1));
    assert_eq!(b.skat_or_hand, Some(5));
    assert_eq!(b.card_play, Some(6));
    assert_eq!(b.finished, Some(36));
    assert_eq!(b.trick_start(0), Some(6));
    assert_eq!(b.trick_start(9), Some(33));
    assert_eq!(b.trick_start(10), None);
    assert_eq!(b.trick_end(9), Some(36));
    assert_eq!(game.num_tricks(), 10);
}

#[test]
fn rejected_move_leaves_the_game_untouched() {
    let mut game = game_of(&clubs_hand_declared());
    let before = game.current().clone();
    let err = game.append(mv("1 SA")).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::OutOfTurn));
    assert_eq!(game.len(), 6);
    assert_eq!(game.current(), &before);
    assert_eq!(game.bookmarks().trick_starts(), &[6]);
}

#[test]
fn history_queries() {
    let game = game_of(&clubs_hand_sweep());
    assert_eq!(game.original_skat().map(Hand::from_cards), Some(hand(SKAT)));
    assert_eq!(game.initial_hand(MIDDLE), Some(hand(MIDDLE_HAND)));

    assert_eq!(game.hand_prior_to_trick(FORE, 0), Some(hand(FORE_HAND)));
    assert_eq!(game.hand_prior_to_trick(FORE, 4), Some(hand("CA.CT.CK.CQ.C9.C8")));
    assert_eq!(game.played_cards_prior_to_trick(FORE, 4), Some(hand("CJ.SJ.HJ.DJ")));
    assert_eq!(game.hand_prior_to_trick(FORE, 10), None);

    let trick = game.trick(2).unwrap();
    assert_eq!(trick.len(), 3);
    assert_eq!(trick[0], (FORE, "HJ".parse().unwrap()));
    assert!(game.trick(10).is_none());

    let prior = game.state_prior_to_trick(3).unwrap();
    assert_eq!(prior.tricks_played, 3);
    // CJ S7 D8, SJ S8 D9, HJ S9 DQ
    assert_eq!(prior.seat(FORE).trick_points, 9);
}

#[test]
fn state_past_the_end_is_not_found() {
    let game = game_of(&all_pass());
    assert!(game.state_at(4).is_ok());
    assert!(matches!(game.state_at(5), Err(DomainError::NotFound(_))));
    assert!(game.snapshot_at(9, Viewer::World).is_err());
}

#[test]
fn result_is_cached_and_dropped_on_prune() {
    let mut game = game_of(&clubs_hand_sweep());
    assert_eq!(game.result().map(|r| r.decl_value), Some(180));

    game.prune(35).unwrap();
    assert!(game.result().is_none());
    assert_eq!(game.current().phase, Phase::CardPlay);
    assert_eq!(game.bookmarks().finished, None);
    assert_eq!(game.bookmarks().trick_end(9), None);
    assert_eq!(game.bookmarks().trick_start(9), Some(33));

    game.append(mv("2 HQ")).unwrap();
    assert_eq!(game.result().map(|r| r.decl_value), Some(180));
}

#[test]
fn prune_back_into_bidding_allows_a_different_history() {
    let mut game = game_of(&clubs_hand_sweep());
    game.prune(2).unwrap();
    assert_eq!(game.bookmarks().card_play, None);
    assert_eq!(game.bookmarks().bidding, Some(1));
    assert_eq!(game.num_tricks(), 0);

    game.append(mv("0 p")).unwrap();
    game.append(mv("2 p")).unwrap();
    assert_eq!(game.current().declarer, Some(MIDDLE));
}

#[test]
fn defender_concession_covers_the_partner() {
    let mut game = game_of(&clubs_hand_declared());
    game.append(mv("0 CJ")).unwrap();
    let len = game.concede(REAR).unwrap();
    assert_eq!(len, 9);
    assert!(game.is_finished());
    assert_eq!(game.moves()[8], mv("1 RE"));
    assert_eq!(game.result().map(|r| r.won), Some(true));
}

#[test]
fn voids_show_in_history() {
    let game = game_of(&clubs_hand_sweep());
    let after_first = game.state_prior_to_trick(1).unwrap();
    assert!(after_first.seat(MIDDLE).voids.has_suit(Suit::Clubs));
    let before_first = game.state_prior_to_trick(0).unwrap();
    assert!(!before_first.seat(MIDDLE).voids.has_suit(Suit::Clubs));
}

#[test]
fn legal_actions_at_any_index() {
    let game = game_of(&clubs_hand_sweep());
    assert!(game.legal_actions_at(0).unwrap().is_empty());
    assert_eq!(game.legal_actions_at(1).unwrap().len(), 2);
    assert_eq!(game.legal_actions_at(6).unwrap().len(), 10);
    assert!(game.legal_actions_at(36).unwrap().is_empty());
}

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    /// Property: checkpointed replay equals replay from the deal
    #[test]
    fn prop_state_at_matches_naive_replay(moves in test_gens::game_log()) {
        let game = Game::from_moves(TableRules::default(), moves.iter().copied()).unwrap();
        for i in 0..=game.len() {
            prop_assert_eq!(game.state_at(i).unwrap(), game.replay_naive(i).unwrap());
        }
    }

    /// Property: prune keeps earlier states and forgets later ones
    #[test]
    fn prop_prune_is_clean(moves in test_gens::game_log(), cut in any::<prop::sample::Index>()) {
        let full = Game::from_moves(TableRules::default(), moves.iter().copied()).unwrap();
        let at = cut.index(full.len() + 1);
        let mut pruned = full.clone();
        pruned.prune(at).unwrap();

        prop_assert_eq!(pruned.len(), at);
        for j in 0..=at {
            prop_assert_eq!(pruned.state_at(j).unwrap(), full.state_at(j).unwrap());
        }
        prop_assert!(pruned.state_at(at + 1).is_err());

        // replaying the cut moves restores the original
        for mv in &moves[at..] {
            pruned.append(*mv).unwrap();
        }
        prop_assert_eq!(pruned.bookmarks(), full.bookmarks());
        prop_assert_eq!(pruned.result(), full.result());
        prop_assert_eq!(pruned.current(), full.current());
    }

    /// Property: a void at trick k excludes that class from later hands
    #[test]
    fn prop_void_monotonicity(moves in test_gens::game_log()) {
        let game = Game::from_moves(TableRules::default(), moves.iter().copied()).unwrap();
        let Some(kind) = game.current().game_type() else { return Ok(()) };
        let starts = game.bookmarks().trick_starts().len();
        for k in 0..starts {
            let at_k = game.state_prior_to_trick(k).unwrap();
            for seat in 0..3u8 {
                let excluded = at_k.seat(seat).voids.excluded_cards(kind);
                for later in k..starts {
                    let hand = game.hand_prior_to_trick(seat, later).unwrap();
                    prop_assert!(hand.is_disjoint(excluded));
                }
            }
        }
    }

    /// Property: snapshots from the projection match the pure function
    #[test]
    fn prop_snapshot_matches_state(moves in test_gens::game_log(), seat in 0..3u8) {
        let game = Game::from_moves(TableRules::default(), moves.iter().copied()).unwrap();
        for i in 0..=game.len() {
            let state = game.state_at(i).unwrap();
            let snap = game.snapshot_at(i, Viewer::Player(seat)).unwrap();
            prop_assert_eq!(snap.phase, state.phase);
            prop_assert_eq!(snap.hand(seat).known(), Some(state.seat(seat).hand));
        }
    }
}
