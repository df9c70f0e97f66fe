//! Moves: `<actor> <action>` lines of the text protocol.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cards_parsing::format_cards;
use super::cards_types::Card;
use super::declaration::Declaration;
use super::hand::Hand;
use super::rules::{is_seat, Seat, PLAYERS};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Who made a move: a seat, or the world (dealer, server, timers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    Seat(Seat),
    World,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Seat(s) => write!(f, "{s}"),
            Actor::World => f.write_str("w"),
        }
    }
}

impl FromStr for Actor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "w" {
            return Ok(Actor::World);
        }
        match s.parse::<u8>() {
            Ok(seat) if is_seat(seat) => Ok(Actor::Seat(seat)),
            _ => Err(DomainError::illegal(
                IllegalMoveKind::UnknownActor,
                format!("unknown actor '{s}'"),
            )),
        }
    }
}

/// One action of the move protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionToken {
    /// World: three hands and the skat.
    Deal {
        hands: [Hand; PLAYERS],
        skat: [Card; 2],
    },
    Bid(u16),
    Pass,
    Yes,
    /// Declarer takes the skat.
    Pickup,
    /// World: the skat cards handed to the declarer after `Pickup`.
    SkatCards([Card; 2]),
    /// Hand game declared without picking up the skat.
    Declare(Declaration),
    /// Declaration after pickup, with the two cards put away.
    DiscardAndDeclare {
        declaration: Declaration,
        discard: [Card; 2],
    },
    Play(Card),
    Resign,
    ShowCards,
    /// World: a seat ran out of time.
    Timeout(Seat),
    /// World: a seat left the table.
    Left(Seat),
}

impl fmt::Display for ActionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionToken::Deal { hands, skat } => write!(
                f,
                "{}|{}|{}|{}",
                hands[0],
                hands[1],
                hands[2],
                format_cards(skat)
            ),
            ActionToken::Bid(b) => write!(f, "{b}"),
            ActionToken::Pass => f.write_str("p"),
            ActionToken::Yes => f.write_str("y"),
            ActionToken::Pickup => f.write_str("s"),
            ActionToken::SkatCards(cards) => f.write_str(&format_cards(cards)),
            ActionToken::Declare(d) => write!(f, "{d}"),
            ActionToken::DiscardAndDeclare {
                declaration,
                discard,
            } => write!(f, "{declaration}.{}", format_cards(discard)),
            ActionToken::Play(c) => write!(f, "{c}"),
            ActionToken::Resign => f.write_str("RE"),
            ActionToken::ShowCards => f.write_str("SC"),
            ActionToken::Timeout(s) => write!(f, "TI.{s}"),
            ActionToken::Left(s) => write!(f, "LE.{s}"),
        }
    }
}

fn parse_error(s: &str, why: &str) -> DomainError {
    DomainError::illegal(IllegalMoveKind::ParseAction, format!("action '{s}': {why}"))
}

fn parse_pair(a: &str, b: &str) -> Result<[Card; 2], DomainError> {
    Ok([a.parse()?, b.parse()?])
}

fn parse_seat_marker(s: &str, digits: &str) -> Result<Seat, DomainError> {
    match digits.parse::<u8>() {
        Ok(seat) if is_seat(seat) => Ok(seat),
        _ => Err(parse_error(s, "bad seat")),
    }
}

fn deal_error(s: &str, why: &str) -> DomainError {
    DomainError::illegal(IllegalMoveKind::InvalidDeal, format!("deal '{s}': {why}"))
}

/// Split 32 cards into hands of ten and a two-card skat.
fn deal_from_cards(s: &str, cards: &[Card]) -> Result<ActionToken, DomainError> {
    if cards.len() != 32 {
        return Err(deal_error(s, "a deal needs 32 cards"));
    }
    let mut hands = [Hand::EMPTY; PLAYERS];
    for (i, hand) in hands.iter_mut().enumerate() {
        *hand = Hand::from_cards(cards[i * 10..(i + 1) * 10].iter().copied());
    }
    let skat = [cards[30], cards[31]];
    let all = hands[0] | hands[1] | hands[2] | Hand::from_cards(skat);
    if all != Hand::FULL_DECK {
        return Err(deal_error(s, "cards repeat"));
    }
    Ok(ActionToken::Deal { hands, skat })
}

/// `h0|h1|h2|skat`, each group dot-separated, sized 10/10/10/2.
fn parse_deal(s: &str) -> Result<ActionToken, DomainError> {
    let groups: Vec<&str> = s.split('|').collect();
    if groups.len() != PLAYERS + 1 {
        return Err(deal_error(s, "expected three hands and a skat"));
    }
    let mut cards = Vec::with_capacity(32);
    for (i, group) in groups.iter().enumerate() {
        let before = cards.len();
        for token in group.split('.').filter(|t| !t.is_empty()) {
            cards.push(token.parse::<Card>()?);
        }
        let expected = if i < PLAYERS { 10 } else { 2 };
        if cards.len() - before != expected {
            return Err(deal_error(s, "expected a 10/10/10/2 split"));
        }
    }
    deal_from_cards(s, &cards)
}

impl FromStr for ActionToken {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => return Ok(ActionToken::Pass),
            "y" => return Ok(ActionToken::Yes),
            "s" => return Ok(ActionToken::Pickup),
            "RE" => return Ok(ActionToken::Resign),
            "SC" => return Ok(ActionToken::ShowCards),
            "" => return Err(parse_error(s, "empty")),
            _ => {}
        }
        if s.contains('|') {
            return parse_deal(s);
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u16>()
                .map(ActionToken::Bid)
                .map_err(|_| parse_error(s, "bid out of range"));
        }
        if let Some(rest) = s.strip_prefix("TI.") {
            return parse_seat_marker(s, rest).map(ActionToken::Timeout);
        }
        if let Some(rest) = s.strip_prefix("LE.") {
            return parse_seat_marker(s, rest).map(ActionToken::Left);
        }

        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [single] => {
                if let Ok(card) = single.parse::<Card>() {
                    return Ok(ActionToken::Play(card));
                }
                single
                    .parse::<Declaration>()
                    .map(ActionToken::Declare)
                    .map_err(|e| match e {
                        DomainError::IllegalMove { detail, .. } => parse_error(s, &detail),
                        other => other,
                    })
            }
            [a, b] => parse_pair(a, b).map(ActionToken::SkatCards),
            [decl, a, b] => Ok(ActionToken::DiscardAndDeclare {
                declaration: decl.parse()?,
                discard: parse_pair(a, b)?,
            }),
            many if many.len() == 32 => {
                let cards = many
                    .iter()
                    .map(|t| t.parse::<Card>())
                    .collect::<Result<Vec<_>, _>>()?;
                deal_from_cards(s, &cards)
            }
            _ => Err(parse_error(s, "unrecognised token")),
        }
    }
}

/// A single entry of the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub actor: Actor,
    pub action: ActionToken,
}

impl Move {
    pub const fn new(actor: Actor, action: ActionToken) -> Self {
        Self { actor, action }
    }

    pub const fn seat(seat: Seat, action: ActionToken) -> Self {
        Self::new(Actor::Seat(seat), action)
    }

    pub const fn world(action: ActionToken) -> Self {
        Self::new(Actor::World, action)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.actor, self.action)
    }
}

impl FromStr for Move {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (actor, action) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| parse_error(s, "expected '<actor> <action>'"))?;
        Ok(Move {
            actor: actor.parse()?,
            action: action.trim().parse()?,
        })
    }
}
