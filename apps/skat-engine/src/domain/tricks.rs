use tracing::debug;

use crate::domain::cards_logic::{follow_class, legal_cards, trick_winner};
use crate::domain::cards_types::Card;
use crate::domain::hand::Hand;
use crate::domain::moves::Actor;
use crate::domain::rules::{next_seat, Seat, PLAYERS, SCHNEIDER_LOSS_POINTS, TRICKS};
use crate::domain::state::{phase_mismatch, GameState, Phase};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Cards `who` may play now; empty outside card play.
pub fn legal_moves(state: &GameState, who: Seat) -> Hand {
    let Some(game) = state.game_type() else {
        return Hand::EMPTY;
    };
    if state.phase != Phase::CardPlay {
        return Hand::EMPTY;
    }
    legal_cards(state.seat(who).hand, state.lead_card(), game)
}

/// Play a card into the current trick, enforcing suit-following. The third
/// card resolves the trick and may end the game; trick boundaries show up
/// as a change of `tricks_played`.
pub fn play_card(state: &mut GameState, who: Seat, card: Card) -> Result<(), DomainError> {
    if state.phase != Phase::CardPlay {
        return Err(phase_mismatch(state.phase, "card play"));
    }
    let decl = state.require_declaration("card play")?;
    let game = decl.game_type;

    if !state.seat(who).hand.contains(card) {
        return Err(DomainError::illegal(
            IllegalMoveKind::CardNotInHand,
            format!("seat {who} does not hold {card}"),
        ));
    }
    if !legal_moves(state, who).contains(card) {
        let lead = state.lead_card().map(|c| c.to_string()).unwrap_or_default();
        return Err(DomainError::illegal(
            IllegalMoveKind::MustFollowSuit,
            format!("{card} does not follow {lead}"),
        ));
    }

    if let Some(lead) = state.lead_card() {
        let led = follow_class(lead, game);
        if follow_class(card, game) != led {
            state.seat_mut(who).voids.mark(led, game);
        }
    }

    let seat = state.seat_mut(who);
    seat.hand.remove(card);
    seat.played.add(card);
    state.trick.push((who, card));

    if state.trick.len() < PLAYERS {
        state.to_move = Some(Actor::Seat(next_seat(who)));
        return Ok(());
    }

    let Some(winner) = trick_winner(&state.trick, game) else {
        return Err(phase_mismatch(state.phase, "trick resolution"));
    };
    let points: u8 = state.trick.iter().map(|&(_, c)| c.points()).sum();
    {
        let w = state.seat_mut(winner);
        w.trick_points += points;
        w.tricks_won += 1;
    }
    state.last_trick = Some(std::mem::take(&mut state.trick));
    state.tricks_played += 1;
    state.to_move = Some(Actor::Seat(winner));
    debug!(trick = state.tricks_played, winner, points, "trick complete");

    if game_over_after_trick(state, winner) {
        state.finish();
    }
    Ok(())
}

fn game_over_after_trick(state: &GameState, winner: Seat) -> bool {
    if state.tricks_played >= TRICKS {
        return true;
    }
    let (Some(decl), Some(declarer)) = (state.declaration, state.declarer) else {
        return false;
    };
    if decl.game_type.is_null() {
        return winner == declarer;
    }
    if decl.schwarz_announced && winner != declarer {
        return true;
    }
    decl.schneider_announced && state.defender_points() > SCHNEIDER_LOSS_POINTS
}

/// A seat gives up. The game ends when the declarer resigns or when both
/// defenders have.
pub fn resign(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    if state.phase != Phase::CardPlay {
        return Err(phase_mismatch(state.phase, "resign"));
    }
    if state.seat(who).resigned {
        return Err(DomainError::illegal(
            IllegalMoveKind::AlreadyResigned,
            format!("seat {who} already resigned"),
        ));
    }
    let declarer = state.require_declarer("resign")?;
    state.seat_mut(who).resigned = true;

    let defenders_out = state
        .defenders()
        .map(|ds| ds.iter().all(|&d| state.seat(d).resigned))
        .unwrap_or(false);
    if who == declarer || defenders_out {
        state.finish();
    }
    Ok(())
}

/// Declarer lays the remaining cards open.
pub fn show_cards(state: &mut GameState, who: Seat) -> Result<(), DomainError> {
    if state.phase != Phase::CardPlay {
        return Err(phase_mismatch(state.phase, "show cards"));
    }
    if state.declarer != Some(who) {
        return Err(DomainError::illegal(
            IllegalMoveKind::NotDeclarer,
            format!("seat {who} is not the declarer"),
        ));
    }
    state.shown = true;
    Ok(())
}
