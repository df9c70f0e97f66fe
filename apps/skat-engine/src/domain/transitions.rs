//! Applies one move to a state: the single entry point of the state machine.

use crate::domain::bidding::{hold_bid, pass, place_bid};
use crate::domain::cards_types::Card;
use crate::domain::declaring::{declare_hand, discard_and_declare, hand_over_skat, pick_up};
use crate::domain::hand::Hand;
use crate::domain::moves::{ActionToken, Actor, Move};
use crate::domain::rules::{is_seat, Seat, HAND_SIZE, MIDDLE, PLAYERS};
use crate::domain::state::{phase_mismatch, GameState, Phase};
use crate::domain::tricks::{play_card, resign, show_cards};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Apply `mv` to a copy of `state`.
///
/// On error the caller's state is untouched and the error says why the move
/// was rejected.
pub fn apply_move(state: &GameState, mv: &Move) -> Result<GameState, DomainError> {
    let mut next = state.clone();
    apply_in_place(&mut next, mv)?;
    Ok(next)
}

fn apply_in_place(state: &mut GameState, mv: &Move) -> Result<(), DomainError> {
    if state.is_finished() {
        return Err(DomainError::illegal(
            IllegalMoveKind::GameFinished,
            format!("'{mv}' after the game finished"),
        ));
    }

    let named_seat = match (mv.actor, mv.action) {
        (_, ActionToken::Timeout(s) | ActionToken::Left(s)) | (Actor::Seat(s), _) => Some(s),
        _ => None,
    };
    if let Some(seat) = named_seat.filter(|&s| !is_seat(s)) {
        return Err(DomainError::illegal(
            IllegalMoveKind::UnknownActor,
            format!("no seat {seat} at this table"),
        ));
    }

    // moves that are not bound to the turn order
    match (mv.actor, mv.action) {
        (Actor::World, ActionToken::Timeout(seat)) => {
            state.timed_out = Some(seat);
            state.finish();
            return Ok(());
        }
        (Actor::World, ActionToken::Left(seat)) => {
            state.left = Some(seat);
            state.finish();
            return Ok(());
        }
        (Actor::Seat(_), ActionToken::Timeout(_) | ActionToken::Left(_)) => {
            return Err(DomainError::illegal(
                IllegalMoveKind::OutOfTurn,
                "timeouts and departures are recorded by the world actor",
            ));
        }
        (Actor::Seat(seat), ActionToken::Resign) => return resign(state, seat),
        (Actor::Seat(seat), ActionToken::ShowCards) => return show_cards(state, seat),
        _ => {}
    }

    state.require_turn(mv.actor, &mv.action.to_string())?;

    match (mv.actor, mv.action) {
        (Actor::World, ActionToken::Deal { hands, skat }) => deal(state, hands, skat),
        (Actor::World, ActionToken::SkatCards(cards)) => hand_over_skat(state, cards),
        (Actor::World, action) => Err(phase_mismatch(
            state.phase,
            &format!("world action '{action}'"),
        )),
        (Actor::Seat(seat), action) => apply_seat_action(state, seat, action),
    }
}

fn apply_seat_action(
    state: &mut GameState,
    seat: Seat,
    action: ActionToken,
) -> Result<(), DomainError> {
    match action {
        ActionToken::Bid(bid) => place_bid(state, seat, bid),
        ActionToken::Yes => hold_bid(state, seat),
        ActionToken::Pass => pass(state, seat),
        ActionToken::Pickup => pick_up(state),
        ActionToken::Declare(decl) => declare_hand(state, decl),
        ActionToken::DiscardAndDeclare {
            declaration,
            discard,
        } => discard_and_declare(state, declaration, discard),
        ActionToken::Play(card) => play_card(state, seat, card),
        other => Err(phase_mismatch(
            state.phase,
            &format!("seat action '{other}'"),
        )),
    }
}

fn deal(
    state: &mut GameState,
    hands: [Hand; PLAYERS],
    skat: [Card; 2],
) -> Result<(), DomainError> {
    if state.phase != Phase::Deal {
        return Err(phase_mismatch(state.phase, "deal"));
    }
    let skat_hand = Hand::from_cards(skat);
    let mut seen = skat_hand;
    let sizes_ok = skat_hand.count() == 2 && hands.iter().all(|h| h.count() == HAND_SIZE);
    let disjoint = hands.iter().all(|&h| {
        let ok = seen.is_disjoint(h);
        seen = seen.union(h);
        ok
    });
    if !sizes_ok || !disjoint || seen != Hand::FULL_DECK {
        return Err(DomainError::illegal(
            IllegalMoveKind::InvalidDeal,
            "a deal needs three disjoint hands of ten and a two-card skat",
        ));
    }

    for (seat, hand) in state.seats.iter_mut().zip(hands) {
        seat.hand = hand;
    }
    state.skat = skat_hand;
    state.dealt_skat = Some(skat);
    state.phase = Phase::Bid;
    state.to_move = Some(Actor::Seat(MIDDLE));
    Ok(())
}
