//! Move generation for the actor to move.

use crate::domain::bidding::lowest_next_bid;
use crate::domain::cards_types::Card;
use crate::domain::declaration::{Declaration, GameType};
use crate::domain::moves::{ActionToken, Actor};
use crate::domain::state::{GameState, Phase};
use crate::domain::tricks::legal_moves;

/// Every declaration with the given hand flag, in canonical order.
pub fn declarations(hand: bool) -> Vec<Declaration> {
    let mut out = Vec::new();
    for game_type in GameType::ALL {
        if game_type.is_null() {
            for ouvert in [false, true] {
                out.push(Declaration {
                    hand,
                    ouvert,
                    ..Declaration::plain(game_type)
                });
            }
            continue;
        }
        out.push(Declaration {
            hand,
            ..Declaration::plain(game_type)
        });
        if hand {
            // schneider, schwarz and ouvert announcements
            for (s, z, o) in [(true, false, false), (true, true, false), (true, true, true)] {
                out.push(Declaration {
                    game_type,
                    hand: true,
                    ouvert: o,
                    schneider_announced: s,
                    schwarz_announced: z,
                });
            }
        }
    }
    out
}

fn null_fits_bid(decl: &Declaration, max_bid: u16) -> bool {
    decl.null_value().map_or(true, |v| max_bid <= v)
}

/// Legal actions of the actor to move. World deals are not enumerated and
/// out-of-turn actions (resign, show cards) are not included.
pub fn legal_actions(state: &GameState) -> Vec<ActionToken> {
    let Some(actor) = state.to_move else {
        return Vec::new();
    };
    match (state.phase, actor) {
        (Phase::Bid, Actor::Seat(_)) => {
            let mut out = Vec::with_capacity(2);
            if let Some(bid) = lowest_next_bid(state) {
                out.push(ActionToken::Bid(bid));
            }
            out.push(ActionToken::Pass);
            out
        }
        (Phase::Answer, Actor::Seat(_)) => vec![ActionToken::Yes, ActionToken::Pass],
        (Phase::SkatOrHandDecl, Actor::Seat(_)) => {
            let mut out = vec![ActionToken::Pickup];
            out.extend(
                declarations(true)
                    .into_iter()
                    .filter(|d| null_fits_bid(d, state.max_bid))
                    .map(ActionToken::Declare),
            );
            out
        }
        (Phase::GetSkat, Actor::World) => state
            .dealt_skat
            .map(|skat| vec![ActionToken::SkatCards(skat)])
            .unwrap_or_default(),
        (Phase::DiscardAndDecl, Actor::Seat(seat)) => {
            let cards: Vec<Card> = state.seat(seat).hand.to_list();
            let mut out = Vec::new();
            for declaration in declarations(false)
                .into_iter()
                .filter(|d| null_fits_bid(d, state.max_bid))
            {
                for (i, &a) in cards.iter().enumerate() {
                    for &b in &cards[i + 1..] {
                        out.push(ActionToken::DiscardAndDeclare {
                            declaration,
                            discard: [a, b],
                        });
                    }
                }
            }
            out
        }
        (Phase::CardPlay, Actor::Seat(seat)) => legal_moves(state, seat)
            .iter()
            .map(ActionToken::Play)
            .collect(),
        _ => Vec::new(),
    }
}
