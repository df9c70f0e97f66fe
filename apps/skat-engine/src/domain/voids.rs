//! Per-player void knowledge inferred from failing to follow.

use serde::{Deserialize, Serialize};

use super::cards_logic::{class_cards, FollowClass};
use super::cards_types::Suit;
use super::declaration::GameType;
use super::hand::Hand;

/// Bits 0-3: suits (by `Suit::index`); bit 4: jacks (grand trump lead).
///
/// In a suit game the trump suit's bit means "holds no trump at all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Voids(u8);

impl Voids {
    pub const JACKS_BIT: u8 = 1 << 4;

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn has_suit(self, suit: Suit) -> bool {
        self.0 & (1 << suit.index()) != 0
    }

    #[inline]
    pub const fn has_jacks(self) -> bool {
        self.0 & Self::JACKS_BIT != 0
    }

    /// Record that the player could not follow a trick of `led` class.
    pub fn mark(&mut self, led: FollowClass, game: GameType) {
        match (led, game.trump_suit()) {
            (FollowClass::Plain(suit), _) => self.0 |= 1 << suit.index(),
            (FollowClass::Trump, Some(trump)) => self.0 |= 1 << trump.index(),
            (FollowClass::Trump, None) => self.0 |= Self::JACKS_BIT,
        }
    }

    /// Cards a player with these voids provably does not hold.
    pub fn excluded_cards(self, game: GameType) -> Hand {
        let mut out = Hand::EMPTY;
        for suit in Suit::ALL {
            if !self.has_suit(suit) {
                continue;
            }
            let class = if game.trump_suit() == Some(suit) {
                FollowClass::Trump
            } else {
                FollowClass::Plain(suit)
            };
            out = out.union(class_cards(class, game));
        }
        if self.has_jacks() {
            out = out.union(Hand::JACKS);
        }
        out
    }
}
