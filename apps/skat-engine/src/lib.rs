//! Skat game-history reconstruction and scoring.
//!
//! A game is an append-only log of [`Move`]s. The engine validates each move
//! against the rules, derives the state after any prefix of the log, answers
//! trick-indexed history queries, values finished games and keeps the
//! running score sheet of a series.

pub mod config;
pub mod domain;
pub mod errors;
pub mod game;
pub mod scoring;

// Re-exports for public API
pub use config::{EngineConfig, ScoringConfig};
pub use domain::{
    apply_move, game_result, legal_actions, snapshot, ActionToken, Actor, Card, Declaration,
    GameResult, GameState, GameType, Hand, HandView, Move, Phase, Rank, Seat, StateSnapshot, Suit,
    TableRules, Viewer,
};
pub use errors::{DomainError, IllegalMoveKind};
pub use game::{Game, GameHandle, MoveLog};
pub use scoring::{Row, ScoreSheet, Series, SeriesHandle, Summary};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
