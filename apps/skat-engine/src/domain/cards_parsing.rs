//! Card token parsing and formatting (e.g., "CJ", "HT", "??").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Token used for a card the viewer cannot see.
pub const UNKNOWN_CARD_TOKEN: &str = "??";

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.letter(), self.rank.letter())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || DomainError::illegal(IllegalMoveKind::ParseCard, format!("Parse card: {s}"));
        let mut chars = s.chars();
        let suit_ch = chars.next().ok_or_else(bad)?;
        let rank_ch = chars.next().ok_or_else(bad)?;
        if chars.next().is_some() {
            return Err(bad());
        }
        let suit = Suit::from_letter(suit_ch).ok_or_else(bad)?;
        let rank = Rank::from_letter(rank_ch).ok_or_else(bad)?;
        Ok(Card { suit, rank })
    }
}

/// Format a possibly hidden card.
pub fn format_card_slot(card: Option<Card>) -> String {
    match card {
        Some(c) => c.to_string(),
        None => UNKNOWN_CARD_TOKEN.to_string(),
    }
}

/// Dot-joined card list, the form used inside move tokens.
pub fn format_cards<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
