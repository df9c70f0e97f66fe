//! Fixed-size bit set of cards.

use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::str::FromStr;

use super::cards_types::{Card, Suit};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// A set of cards, one bit per card (`Card::index`).
///
/// All 32 bits are valid cards, so the domain is closed under every set
/// operation below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand(u32);

const SUIT_MASK: u32 = 0xFF;

impl Hand {
    pub const EMPTY: Hand = Hand(0);
    pub const FULL_DECK: Hand = Hand(u32::MAX);
    /// The four jacks (rank index 4 in every suit).
    pub const JACKS: Hand = Hand(0x1010_1010);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Hand(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Hand(cards.into_iter().fold(0, |acc, c| acc | c.bit()))
    }

    /// All cards of a suit, jack included.
    #[inline]
    pub const fn suit(suit: Suit) -> Hand {
        Hand(SUIT_MASK << (suit.index() * 8))
    }

    #[inline]
    pub const fn count(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, card: Card) -> bool {
        self.0 & card.bit() != 0
    }

    #[inline]
    pub fn add(&mut self, card: Card) {
        self.0 |= card.bit();
    }

    #[inline]
    pub fn remove(&mut self, card: Card) {
        self.0 &= !card.bit();
    }

    /// Copy of `self` with the cards of `subset` removed.
    #[inline]
    pub const fn clear(self, subset: Hand) -> Hand {
        Hand(self.0 & !subset.0)
    }

    #[inline]
    pub const fn union(self, other: Hand) -> Hand {
        Hand(self.0 | other.0)
    }

    #[inline]
    pub const fn intersect(self, other: Hand) -> Hand {
        Hand(self.0 & other.0)
    }

    #[inline]
    pub const fn complement(self) -> Hand {
        Hand(!self.0 & Hand::FULL_DECK.0)
    }

    #[inline]
    pub const fn is_disjoint(self, other: Hand) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    pub const fn is_subset_of(self, other: Hand) -> bool {
        self.0 & !other.0 == 0
    }

    /// Cards of `suit` in this hand, jack included.
    #[inline]
    pub const fn suit_cards(self, suit: Suit) -> Hand {
        self.intersect(Hand::suit(suit))
    }

    #[inline]
    pub const fn jacks(self) -> Hand {
        self.intersect(Hand::JACKS)
    }

    /// Sum of card points.
    pub fn points(self) -> u8 {
        self.iter().map(Card::points).sum()
    }

    /// Cards in ascending bit order.
    pub fn iter(self) -> impl Iterator<Item = Card> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let i = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Card::from_index(i)
        })
    }

    pub fn to_list(self) -> Vec<Card> {
        self.iter().collect()
    }
}

impl BitOr for Hand {
    type Output = Hand;
    fn bitor(self, rhs: Hand) -> Hand {
        self.union(rhs)
    }
}

impl BitAnd for Hand {
    type Output = Hand;
    fn bitand(self, rhs: Hand) -> Hand {
        self.intersect(rhs)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand::from_cards(iter)
    }
}

/// Dot-separated card list in bit order, e.g. `D7.HT.CJ`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in self.iter() {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}

/// Parses a dot-separated card list. Duplicates are rejected so that a
/// parsed hand always has as many cards as tokens.
impl FromStr for Hand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hand = Hand::EMPTY;
        if s.is_empty() {
            return Ok(hand);
        }
        for token in s.split('.') {
            let card: Card = token.parse()?;
            if hand.contains(card) {
                return Err(DomainError::illegal(
                    IllegalMoveKind::ParseCard,
                    format!("duplicate card {card} in {s}"),
                ));
            }
            hand.add(card);
        }
        Ok(hand)
    }
}
