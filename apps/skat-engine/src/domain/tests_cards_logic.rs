use crate::domain::cards_logic::{card_beats, follow_class, legal_cards, matadors, trick_winner, FollowClass};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::declaration::GameType;
use crate::domain::fixtures::hand;

fn c(token: &str) -> Card {
    token.parse().unwrap()
}

#[test]
fn jacks_are_trump_except_in_null() {
    assert_eq!(follow_class(c("DJ"), GameType::Hearts), FollowClass::Trump);
    assert_eq!(follow_class(c("DJ"), GameType::Grand), FollowClass::Trump);
    assert_eq!(
        follow_class(c("DJ"), GameType::Null),
        FollowClass::Plain(Suit::Diamonds)
    );
    assert_eq!(
        follow_class(c("DA"), GameType::Grand),
        FollowClass::Plain(Suit::Diamonds)
    );
}

#[test]
fn suit_game_order() {
    let g = GameType::Spades;
    assert!(card_beats(c("DJ"), c("SA"), g));
    assert!(card_beats(c("CJ"), c("SJ"), g));
    assert!(card_beats(c("ST"), c("SK"), g));
    assert!(card_beats(c("S7"), c("HA"), g));
    assert!(!card_beats(c("HA"), c("S7"), g));
}

#[test]
fn null_order_puts_ten_between_nine_and_jack() {
    let g = GameType::Null;
    assert!(card_beats(c("HT"), c("H9"), g));
    assert!(card_beats(c("HJ"), c("HT"), g));
    assert!(!card_beats(c("HJ"), c("HQ"), g));
}

#[test]
fn off_suit_never_wins() {
    let plays = [(0, c("H7")), (1, c("SA")), (2, c("H8"))];
    assert_eq!(trick_winner(&plays, GameType::Grand), Some(2));
    assert_eq!(trick_winner(&plays, GameType::Spades), Some(1));
    assert_eq!(trick_winner(&[], GameType::Spades), None);
}

#[test]
fn following_in_grand_separates_jacks() {
    let h = hand("HJ.H7.SA");
    assert_eq!(legal_cards(h, Some(c("HA")), GameType::Grand), hand("H7"));
    assert_eq!(legal_cards(h, Some(c("CJ")), GameType::Grand), hand("HJ"));
    assert_eq!(legal_cards(h, Some(c("DA")), GameType::Grand), h);
    assert_eq!(legal_cards(h, None, GameType::Grand), h);
}

#[test]
fn matadors_count_the_unbroken_run() {
    let with_three = hand("CJ.SJ.HJ.HA.HT");
    assert_eq!(matadors(with_three, GameType::Hearts), 3);
    assert_eq!(matadors(with_three, GameType::Grand), 3);

    let without_one = hand("SJ.HJ.DJ.HA");
    assert_eq!(matadors(without_one, GameType::Hearts), -1);

    // hearts: CJ SJ HJ DJ HA HT HK HQ ...
    let long_run = hand("CJ.SJ.HJ.DJ.HA.HT.HK.S7");
    assert_eq!(matadors(long_run, GameType::Hearts), 7);
    assert_eq!(matadors(long_run, GameType::Null), 0);
}
