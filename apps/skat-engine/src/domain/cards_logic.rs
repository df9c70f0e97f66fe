//! Trump, following and trick-winner rules for the three game families.

use super::cards_types::{Card, Rank, Suit};
use super::declaration::GameType;
use super::hand::Hand;
use super::rules::Seat;

/// What a card counts as when following: a trump, or a plain suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowClass {
    Trump,
    Plain(Suit),
}

/// All trump cards of a game type.
pub const fn trumps(game: GameType) -> Hand {
    match game {
        GameType::Null => Hand::EMPTY,
        GameType::Grand => Hand::JACKS,
        GameType::Diamonds => Hand::JACKS.union(Hand::suit(Suit::Diamonds)),
        GameType::Hearts => Hand::JACKS.union(Hand::suit(Suit::Hearts)),
        GameType::Spades => Hand::JACKS.union(Hand::suit(Suit::Spades)),
        GameType::Clubs => Hand::JACKS.union(Hand::suit(Suit::Clubs)),
    }
}

pub fn follow_class(card: Card, game: GameType) -> FollowClass {
    if trumps(game).contains(card) {
        FollowClass::Trump
    } else {
        FollowClass::Plain(card.suit)
    }
}

/// Every card that belongs to the given class.
pub fn class_cards(class: FollowClass, game: GameType) -> Hand {
    match class {
        FollowClass::Trump => trumps(game),
        FollowClass::Plain(suit) => Hand::suit(suit).clear(trumps(game)),
    }
}

/// Cards of `hand` that may be played onto a trick led by `lead`.
pub fn legal_cards(hand: Hand, lead: Option<Card>, game: GameType) -> Hand {
    let Some(lead) = lead else {
        return hand;
    };
    let following = hand.intersect(class_cards(follow_class(lead, game), game));
    if following.is_empty() {
        hand
    } else {
        following
    }
}

/// Rank of a card within its follow class; higher wins.
pub fn trick_rank(card: Card, game: GameType) -> u8 {
    if game.is_null() {
        return card.rank.index();
    }
    if card.is_jack() {
        return 7 + card.suit.index();
    }
    match card.rank {
        Rank::Seven => 0,
        Rank::Eight => 1,
        Rank::Nine => 2,
        Rank::Queen => 3,
        Rank::King => 4,
        Rank::Ten => 5,
        Rank::Ace => 6,
        Rank::Jack => 7,
    }
}

/// Whether `challenger` beats the currently winning `best` card.
pub fn card_beats(challenger: Card, best: Card, game: GameType) -> bool {
    match (follow_class(challenger, game), follow_class(best, game)) {
        (a, b) if a == b => trick_rank(challenger, game) > trick_rank(best, game),
        (FollowClass::Trump, _) => true,
        _ => false,
    }
}

/// Winner of a complete (or partial) trick; `None` for an empty trick.
pub fn trick_winner(plays: &[(Seat, Card)], game: GameType) -> Option<Seat> {
    let (first, rest) = plays.split_first()?;
    let (winner, _) = rest.iter().fold(*first, |best, &play| {
        if card_beats(play.1, best.1, game) {
            play
        } else {
            best
        }
    });
    Some(winner)
}

/// Number of matadors: the run of top trumps the declarer holds ("with",
/// positive) or is missing ("against", negative), counted over the
/// declarer's ten cards plus the skat.
pub fn matadors(cards: Hand, game: GameType) -> i32 {
    let order = matador_order(game);
    let Some(&top) = order.first() else {
        return 0;
    };
    let with = cards.contains(top);
    let run = order
        .iter()
        .take_while(|&&c| cards.contains(c) == with)
        .count() as i32;
    if with {
        run
    } else {
        -run
    }
}

/// Trumps from highest to lowest.
fn matador_order(game: GameType) -> Vec<Card> {
    let mut order: Vec<Card> = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds]
        .into_iter()
        .map(|s| Card::new(s, Rank::Jack))
        .collect();
    match game {
        GameType::Null => return Vec::new(),
        GameType::Grand => {}
        _ => {
            if let Some(trump) = game.trump_suit() {
                for rank in [
                    Rank::Ace,
                    Rank::Ten,
                    Rank::King,
                    Rank::Queen,
                    Rank::Nine,
                    Rank::Eight,
                    Rank::Seven,
                ] {
                    order.push(Card::new(trump, rank));
                }
            }
        }
    }
    order
}
