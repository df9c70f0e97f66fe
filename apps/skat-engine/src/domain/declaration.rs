//! Game declarations: game type plus modifiers, and their short token form.
//!
//! Token form: type letter (`D H S C G N`), then `O` (ouvert), `H` (hand) and
//! for suit/grand games `S` (schneider announced) or `Z` (schwarz announced).
//! Implied modifiers are not written: ouvert suit/grand games imply hand,
//! schneider and schwarz; schwarz implies schneider.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cards_types::Suit;
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Null game values indexed by `ouvert * 2 + hand`.
pub const NULL_VALUES: [u16; 4] = [23, 35, 46, 59];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
    Grand,
    Null,
}

impl GameType {
    pub const ALL: [GameType; 6] = [
        GameType::Diamonds,
        GameType::Hearts,
        GameType::Spades,
        GameType::Clubs,
        GameType::Grand,
        GameType::Null,
    ];

    pub const fn letter(self) -> char {
        match self {
            GameType::Diamonds => 'D',
            GameType::Hearts => 'H',
            GameType::Spades => 'S',
            GameType::Clubs => 'C',
            GameType::Grand => 'G',
            GameType::Null => 'N',
        }
    }

    pub fn from_letter(ch: char) -> Option<GameType> {
        GameType::ALL.iter().copied().find(|g| g.letter() == ch)
    }

    /// Trump suit of a suit game.
    pub const fn trump_suit(self) -> Option<Suit> {
        match self {
            GameType::Diamonds => Some(Suit::Diamonds),
            GameType::Hearts => Some(Suit::Hearts),
            GameType::Spades => Some(Suit::Spades),
            GameType::Clubs => Some(Suit::Clubs),
            GameType::Grand | GameType::Null => None,
        }
    }

    /// Base value for suit and grand games; null games use [`NULL_VALUES`].
    pub const fn base_value(self) -> Option<u16> {
        match self {
            GameType::Diamonds => Some(9),
            GameType::Hearts => Some(10),
            GameType::Spades => Some(11),
            GameType::Clubs => Some(12),
            GameType::Grand => Some(24),
            GameType::Null => None,
        }
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        matches!(self, GameType::Null)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    pub game_type: GameType,
    pub hand: bool,
    pub ouvert: bool,
    pub schneider_announced: bool,
    pub schwarz_announced: bool,
}

impl Declaration {
    /// Build a declaration, applying the implied modifiers and rejecting
    /// impossible combinations.
    pub fn new(
        game_type: GameType,
        hand: bool,
        ouvert: bool,
        schneider_announced: bool,
        schwarz_announced: bool,
    ) -> Result<Self, DomainError> {
        let mut decl = Declaration {
            game_type,
            hand,
            ouvert,
            schneider_announced,
            schwarz_announced,
        };

        if game_type.is_null() {
            if schneider_announced || schwarz_announced {
                return Err(DomainError::illegal(
                    IllegalMoveKind::ParseDeclaration,
                    "null games cannot announce schneider or schwarz",
                ));
            }
            return Ok(decl);
        }

        if decl.ouvert {
            decl.hand = true;
            decl.schneider_announced = true;
            decl.schwarz_announced = true;
        }
        if decl.schwarz_announced {
            decl.schneider_announced = true;
        }
        if decl.schneider_announced && !decl.hand {
            return Err(DomainError::illegal(
                IllegalMoveKind::ParseDeclaration,
                "schneider/schwarz can only be announced in hand games",
            ));
        }
        Ok(decl)
    }

    /// Declaration without modifiers (a game played after picking up the skat).
    pub const fn plain(game_type: GameType) -> Self {
        Declaration {
            game_type,
            hand: false,
            ouvert: false,
            schneider_announced: false,
            schwarz_announced: false,
        }
    }

    /// Hand game without announcements.
    pub const fn hand(game_type: GameType) -> Self {
        Declaration {
            hand: true,
            ..Declaration::plain(game_type)
        }
    }

    /// Fixed value of a null game.
    pub fn null_value(&self) -> Option<u16> {
        if !self.game_type.is_null() {
            return None;
        }
        let idx = (self.ouvert as usize) * 2 + self.hand as usize;
        NULL_VALUES.get(idx).copied()
    }

    /// Base value (suit/grand) or fixed null value.
    pub fn base_value(&self) -> u16 {
        match self.game_type.base_value() {
            Some(v) => v,
            None => self.null_value().unwrap_or(NULL_VALUES[0]),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.game_type.letter())?;
        if self.ouvert {
            f.write_str("O")?;
            if !self.game_type.is_null() {
                return Ok(());
            }
        }
        if self.hand {
            f.write_str("H")?;
        }
        if !self.game_type.is_null() {
            if self.schwarz_announced {
                f.write_str("Z")?;
            } else if self.schneider_announced {
                f.write_str("S")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Declaration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |why: &str| {
            DomainError::illegal(
                IllegalMoveKind::ParseDeclaration,
                format!("declaration '{s}': {why}"),
            )
        };
        let mut chars = s.chars();
        let game_type = chars
            .next()
            .and_then(GameType::from_letter)
            .ok_or_else(|| bad("unknown game type"))?;

        let (mut hand, mut ouvert, mut schneider, mut schwarz) = (false, false, false, false);
        for ch in chars {
            let flag = match ch {
                'H' => &mut hand,
                'O' => &mut ouvert,
                'S' => &mut schneider,
                'Z' => &mut schwarz,
                _ => return Err(bad("unknown modifier")),
            };
            if *flag {
                return Err(bad("repeated modifier"));
            }
            *flag = true;
        }
        Declaration::new(game_type, hand, ouvert, schneider, schwarz)
    }
}
