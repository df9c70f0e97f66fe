//! Domain layer: cards, rules and the game state machine. Pure functions
//! over plain values; no locking and no I/O.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod declaration;
pub mod declaring;
pub mod hand;
pub mod legal;
pub mod moves;
pub mod result;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod transitions;
pub mod tricks;
pub mod voids;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_cards_logic;
#[cfg(test)]
mod tests_legal;
#[cfg(test)]
mod tests_result;

// Re-exports for ergonomics
pub use cards_types::{Card, Rank, Suit};
pub use declaration::{Declaration, GameType};
pub use hand::Hand;
pub use legal::legal_actions;
pub use moves::{ActionToken, Actor, Move};
pub use result::{game_result, GameResult};
pub use rules::{Seat, FORE, MIDDLE, PLAYERS, REAR};
pub use snapshot::{snapshot, HandView, StateSnapshot, Viewer};
pub use state::{GameState, Phase, TableRules};
pub use transitions::apply_move;
pub use voids::Voids;
