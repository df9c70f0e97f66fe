//! Domain-level error type returned by every fallible engine operation.
//!
//! Errors are plain values so that callers (network handlers, replay tools,
//! tests) can match on them. Nothing in the engine panics on bad input.

use thiserror::Error;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IllegalMoveKind {
    ParseCard,
    ParseAction,
    ParseDeclaration,
    InvalidDeal,
    PhaseMismatch,
    OutOfTurn,
    CardNotInHand,
    MustFollowSuit,
    InvalidBid,
    InvalidDeclaration,
    InvalidDiscard,
    AlreadyResigned,
    NotDeclarer,
    UnknownActor,
    GameFinished,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Move rejected synchronously; the move log is unchanged.
    #[error("illegal move ({kind:?}): {detail}")]
    IllegalMove {
        kind: IllegalMoveKind,
        detail: String,
    },
    /// Persisted log entry could not be replayed; the game stops at `index`.
    #[error("malformed log entry at {index}: {detail}")]
    MalformedLogEntry { index: usize, detail: String },
    /// Local reconstruction disagrees with an authoritative state.
    #[error("desync: {0}")]
    Desync(String),
    /// Invalid engine configuration.
    #[error("config error: {0}")]
    Config(String),
    /// Query outside the recorded game (index past the end, unknown game).
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn illegal(kind: IllegalMoveKind, detail: impl Into<String>) -> Self {
        Self::IllegalMove {
            kind,
            detail: detail.into(),
        }
    }
    pub fn malformed(index: usize, detail: impl Into<String>) -> Self {
        Self::MalformedLogEntry {
            index,
            detail: detail.into(),
        }
    }
    pub fn desync(detail: impl Into<String>) -> Self {
        Self::Desync(detail.into())
    }
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    /// The rejection reason, if this is an illegal-move error.
    pub fn illegal_kind(&self) -> Option<IllegalMoveKind> {
        match self {
            DomainError::IllegalMove { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
