//! Skat pickup, discarding and game declaration.

use tracing::debug;

use crate::domain::cards_types::Card;
use crate::domain::declaration::{Declaration, GameType};
use crate::domain::hand::Hand;
use crate::domain::moves::Actor;
use crate::domain::rules::{FORE, HAND_SIZE};
use crate::domain::state::{phase_mismatch, GameState, Phase};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// A null game can only fulfil bids up to its fixed value.
fn null_bid_limit(decl: &Declaration) -> u16 {
    decl.null_value().unwrap_or(0)
}

fn check_null_bid(state: &GameState, decl: &Declaration) -> Result<(), DomainError> {
    if decl.game_type == GameType::Null && state.max_bid > null_bid_limit(decl) {
        return Err(DomainError::illegal(
            IllegalMoveKind::InvalidDeclaration,
            format!("{decl} is worth less than the bid {}", state.max_bid),
        ));
    }
    Ok(())
}

/// Declarer takes the skat; the world actor hands it over next.
pub fn pick_up(state: &mut GameState) -> Result<(), DomainError> {
    if state.phase != Phase::SkatOrHandDecl {
        return Err(phase_mismatch(state.phase, "skat pickup"));
    }
    state.phase = Phase::GetSkat;
    state.skat_taken = true;
    state.to_move = Some(Actor::World);
    Ok(())
}

/// World actor reveals the skat to the declarer.
pub fn hand_over_skat(state: &mut GameState, cards: [Card; 2]) -> Result<(), DomainError> {
    if state.phase != Phase::GetSkat {
        return Err(phase_mismatch(state.phase, "skat cards"));
    }
    let declarer = state.require_declarer("skat cards")?;
    let revealed = Hand::from_cards(cards);
    if revealed.count() != 2 || revealed != state.skat {
        return Err(DomainError::illegal(
            IllegalMoveKind::InvalidDiscard,
            format!("skat cards {}.{} do not match the dealt skat", cards[0], cards[1]),
        ));
    }
    let seat = state.seat_mut(declarer);
    seat.hand = seat.hand.union(revealed);
    state.skat = Hand::EMPTY;
    state.phase = Phase::DiscardAndDecl;
    state.to_move = Some(Actor::Seat(declarer));
    Ok(())
}

/// Hand game declared straight from the skat-or-hand decision.
pub fn declare_hand(state: &mut GameState, decl: Declaration) -> Result<(), DomainError> {
    if state.phase != Phase::SkatOrHandDecl {
        return Err(phase_mismatch(state.phase, "hand declaration"));
    }
    if !decl.hand {
        return Err(DomainError::illegal(
            IllegalMoveKind::InvalidDeclaration,
            format!("{decl}: a game declared without the skat must be a hand game"),
        ));
    }
    check_null_bid(state, &decl)?;
    start_card_play(state, decl)
}

/// Declarer puts two cards away and declares.
pub fn discard_and_declare(
    state: &mut GameState,
    decl: Declaration,
    discard: [Card; 2],
) -> Result<(), DomainError> {
    if state.phase != Phase::DiscardAndDecl {
        return Err(phase_mismatch(state.phase, "discard"));
    }
    if decl.hand {
        return Err(DomainError::illegal(
            IllegalMoveKind::InvalidDeclaration,
            format!("{decl}: hand games cannot be declared after taking the skat"),
        ));
    }
    check_null_bid(state, &decl)?;

    let declarer = state.require_declarer("discard")?;
    let put_away = Hand::from_cards(discard);
    let hand = state.seat(declarer).hand;
    if put_away.count() != 2 || !put_away.is_subset_of(hand) {
        return Err(DomainError::illegal(
            IllegalMoveKind::InvalidDiscard,
            format!("cannot discard {}.{}", discard[0], discard[1]),
        ));
    }
    let remaining = hand.clear(put_away);
    if remaining.count() != HAND_SIZE {
        return Err(DomainError::illegal(
            IllegalMoveKind::InvalidDiscard,
            format!("declarer would hold {} cards", remaining.count()),
        ));
    }

    state.seat_mut(declarer).hand = remaining;
    state.skat = put_away;
    start_card_play(state, decl)
}

fn start_card_play(state: &mut GameState, decl: Declaration) -> Result<(), DomainError> {
    let declarer = state.require_declarer("declaration")?;
    debug!(declarer, declaration = %decl, bid = state.max_bid, "game declared");
    state.declaration = Some(decl);
    state.declarer_hand_before_cardplay = Some(state.seat(declarer).hand);
    state.phase = Phase::CardPlay;
    state.tricks_played = 0;
    state.trick.clear();
    state.to_move = Some(Actor::Seat(FORE));
    Ok(())
}
