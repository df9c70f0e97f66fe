//! Append-only move log and its line-based text form.
//!
//! ```text
//! # comment
//! w CJ.SJ.HJ.DJ.CA.CT.CK.CQ.C9.C8|...|...|D8.D7
//! 1 18
//! 0 y
//! ```
//! Games in one file are separated by blank lines.

use std::fmt;

use crate::domain::moves::Move;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Only the projection appends, after the move was validated.
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Keep the first `len` moves.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.moves.truncate(len);
    }
}

impl fmt::Display for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mv in &self.moves {
            writeln!(f, "{mv}")?;
        }
        Ok(())
    }
}

/// Moves of one game as read from text, with the first unreadable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLog {
    pub moves: Vec<Move>,
    pub error: Option<DomainError>,
}

/// Parse one game's lines. Parsing stops at the first bad line; its position
/// in the move sequence is reported as a `MalformedLogEntry`.
pub fn parse_moves(text: &str) -> ParsedLog {
    let mut moves = Vec::new();
    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<Move>() {
            Ok(mv) => moves.push(mv),
            Err(e) => {
                let index = moves.len();
                return ParsedLog {
                    moves,
                    error: Some(DomainError::malformed(
                        index,
                        format!("line {}: {e}", line_no + 1),
                    )),
                };
            }
        }
    }
    ParsedLog { moves, error: None }
}

/// Split a multi-game text into per-game chunks (blank-line separated).
pub fn split_games(text: &str) -> Vec<String> {
    let mut games = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if current.lines().any(|l| !l.trim_start().starts_with('#')) {
                games.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    if current.lines().any(|l| !l.trim_start().starts_with('#')) {
        games.push(current);
    }
    games
}
