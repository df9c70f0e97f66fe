//! Bidding: middle hand bids to fore hand, then rear hand to the survivor.
//! If middle and rear both pass without a bid, fore hand may open or pass.

use crate::domain::moves::Actor;
use crate::domain::rules::{is_ladder_bid, next_bid, Seat, BID_LIMIT, FORE, MIDDLE, MIN_BID, REAR};
use crate::domain::state::{phase_mismatch, GameState, Phase};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Whether `bid` may be named given the current maximum.
pub fn is_valid_bid(state: &GameState, bid: u16) -> bool {
    if bid <= state.max_bid || bid < MIN_BID || bid >= BID_LIMIT {
        return false;
    }
    !state.rules.strict_bids || is_ladder_bid(bid)
}

/// The lowest bid the current bidder could name.
pub fn lowest_next_bid(state: &GameState) -> Option<u16> {
    if state.phase != Phase::Bid {
        return None;
    }
    next_bid(state.max_bid)
}

/// Bidder names `bid`.
pub fn place_bid(state: &mut GameState, who: Seat, bid: u16) -> Result<(), DomainError> {
    if state.phase != Phase::Bid {
        return Err(phase_mismatch(state.phase, "bid"));
    }
    if !is_valid_bid(state, bid) {
        return Err(DomainError::illegal(
            IllegalMoveKind::InvalidBid,
            format!("bid {bid} is not allowed after {}", state.max_bid),
        ));
    }

    state.max_bid = bid;
    state.seat_mut(who).bid = bid;

    if who == FORE {
        // fore hand opening after two passes wins immediately
        return declare_winner(state, FORE);
    }

    state.phase = Phase::Answer;
    state.to_move = state.asked.map(Actor::Seat);
    Ok(())
}

/// Asked player holds the current bid.
pub fn hold_bid(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    if state.phase != Phase::Answer {
        return Err(phase_mismatch(state.phase, "yes"));
    }
    state.seat_mut(who).bid = state.max_bid;
    state.phase = Phase::Bid;
    state.to_move = state.bidder.map(Actor::Seat);
    Ok(())
}

/// Pass, either as bidder or as asked player.
pub fn pass(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    match state.phase {
        Phase::Bid => bidder_passes(state, who),
        Phase::Answer => asked_passes(state, who),
        other => Err(phase_mismatch(other, "pass")),
    }
}

fn bidder_passes(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    state.seat_mut(who).passed = true;

    match state.bidder {
        Some(FORE) => {
            // everyone passed
            state.finish();
            Ok(())
        }
        Some(MIDDLE) => {
            state.bidder = Some(REAR);
            state.asked = Some(FORE);
            state.to_move = Some(Actor::Seat(REAR));
            Ok(())
        }
        Some(REAR) if state.max_bid < MIN_BID => {
            state.bidder = Some(FORE);
            state.asked = None;
            state.to_move = Some(Actor::Seat(FORE));
            Ok(())
        }
        Some(REAR) => {
            let winner = state.asked.ok_or_else(|| {
                DomainError::illegal(IllegalMoveKind::PhaseMismatch, "no one left to win the bid")
            })?;
            declare_winner(state, winner)
        }
        _ => Err(phase_mismatch(state.phase, "pass")),
    }
}

fn asked_passes(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    state.seat_mut(who).passed = true;

    match state.bidder {
        Some(MIDDLE) => {
            state.phase = Phase::Bid;
            state.bidder = Some(REAR);
            state.asked = Some(MIDDLE);
            state.to_move = Some(Actor::Seat(REAR));
            Ok(())
        }
        Some(bidder) => declare_winner(state, bidder),
        None => Err(phase_mismatch(state.phase, "pass")),
    }
}

fn declare_winner(state: &mut GameState, winner: Seat) -> Result<(), DomainError> {
    state.declarer = Some(winner);
    state.phase = Phase::SkatOrHandDecl;
    state.to_move = Some(Actor::Seat(winner));
    Ok(())
}
