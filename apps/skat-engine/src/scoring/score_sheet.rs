//! Running score sheet of a series.
//!
//! Rows are kept in game order, one per finished game. Seats rotate with
//! every game: seat `s` of game `g` is player `(s + g + 1) % player_count`,
//! so the dealer of game 0 is player 0 and at a four-seat table the dealer
//! sits out.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ScoringConfig;
use crate::domain::result::GameResult;
use crate::domain::rules::{defenders, Seat};
use crate::errors::domain::DomainError;

/// Per-player running totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cumulative {
    pub score: i32,
    /// Games won as declarer.
    pub wins: u32,
    /// Games lost as declarer.
    pub losses: u32,
    /// Games won as defender.
    pub def_wins: u32,
    /// Games lost as defender.
    pub def_losses: u32,
    pub penalties: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Game number within the series (0-based).
    pub game: usize,
    pub result: GameResult,
    /// Player (not seat) who declared.
    pub declarer_player: Option<usize>,
    pub players: Vec<Cumulative>,
    pub cumulative_passes: u32,
}

/// Derived rows computed from the last row's totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub score: Vec<i32>,
    pub win_loss: Vec<i32>,
    pub opponent_loss: Vec<i32>,
    pub timeout: Vec<i32>,
    pub total: Vec<i32>,
}

/// Absolute player of `seat` in game `game`.
pub fn player_of(seat: Seat, game: usize, player_count: usize) -> usize {
    (usize::from(seat) + game + 1) % player_count
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSheet {
    config: ScoringConfig,
    rows: Vec<Row>,
}

impl ScoreSheet {
    /// An empty sheet. Fails unless `config` passes validation.
    pub fn new(config: ScoringConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            config,
            rows: Vec::new(),
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Option<&Row> {
        self.rows.get(i)
    }

    /// Row belonging to game `game`.
    pub fn row_for_game(&self, game: usize) -> Option<&Row> {
        self.rows.iter().find(|r| r.game == game)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Totals after the last row (zeros before the first game).
    pub fn totals(&self) -> Vec<Cumulative> {
        self.rows
            .last()
            .map(|r| r.players.clone())
            .unwrap_or_else(|| vec![Cumulative::default(); self.config.player_count])
    }

    fn passes(&self) -> u32 {
        self.rows.last().map_or(0, |r| r.cumulative_passes)
    }

    /// Add the row for finished game `game`. Games must be added in
    /// increasing order.
    pub fn append(&mut self, game: usize, result: GameResult) -> Result<&Row, DomainError> {
        if let Some(last) = self.rows.last() {
            if game <= last.game {
                return Err(DomainError::malformed(
                    self.rows.len(),
                    format!("game {game} scored after game {}", last.game),
                ));
            }
        }
        let n = self.config.player_count;
        let mut players = self.totals();
        let mut passes = self.passes();

        for (seat, &marks) in result.penalties.iter().enumerate() {
            players[player_of(seat as Seat, game, n)].penalties += u32::from(marks);
        }

        let declarer_player = result.declarer.map(|d| player_of(d, game, n));
        if result.passed {
            passes += 1;
        } else if let (Some(declarer), Some(_)) = (result.declarer, result.declaration) {
            let won = result.decl_value > 0;
            let p = &mut players[player_of(declarer, game, n)];
            p.score += result.decl_value;
            if won {
                p.wins += 1;
            } else {
                p.losses += 1;
            }
            for d in defenders(declarer) {
                let q = &mut players[player_of(d, game, n)];
                if won {
                    q.def_losses += 1;
                } else {
                    q.def_wins += 1;
                }
            }
        }

        info!(
            game,
            declarer = ?declarer_player,
            value = result.decl_value,
            passed = result.passed,
            "score row appended"
        );
        self.rows.push(Row {
            game,
            result,
            declarer_player,
            players,
            cumulative_passes: passes,
        });
        // just pushed
        Ok(&self.rows[self.rows.len() - 1])
    }

    /// Drop the rows of games `>= game`.
    pub fn truncate_from_game(&mut self, game: usize) {
        self.rows.retain(|r| r.game < game);
    }

    pub fn summary(&self) -> Summary {
        let totals = self.totals();
        let c = &self.config;
        let all_losses: u32 = totals.iter().map(|t| t.losses).sum();
        let mut out = Summary::default();
        for t in &totals {
            let win_loss = (t.wins as i32 - t.losses as i32) * c.decl_win_points;
            let opponent_loss = (all_losses - t.losses) as i32 * c.opponent_loss_points();
            let timeout = -(t.penalties as i32) * c.penalty_points;
            out.score.push(t.score);
            out.win_loss.push(win_loss);
            out.opponent_loss.push(opponent_loss);
            out.timeout.push(timeout);
            out.total.push(t.score + win_loss + opponent_loss + timeout);
        }
        out
    }

    /// One JSON document per row.
    pub fn to_json_lines(&self) -> Result<String, DomainError> {
        let mut out = String::new();
        for row in &self.rows {
            let line = serde_json::to_string(row)
                .map_err(|e| DomainError::config(format!("row {}: {e}", row.game)))?;
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    /// Rebuild a sheet from saved rows. Totals are recomputed from the
    /// stored results and must agree with the stored ones.
    pub fn from_json_lines(config: ScoringConfig, text: &str) -> Result<Self, DomainError> {
        let mut sheet = Self::new(config)?;
        for (i, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let stored: Row = serde_json::from_str(line)
                .map_err(|e| DomainError::malformed(i, e.to_string()))?;
            let row = sheet.append(stored.game, stored.result.clone())?;
            if *row != stored {
                return Err(DomainError::desync(format!(
                    "saved row for game {} disagrees with its result",
                    stored.game
                )));
            }
        }
        Ok(sheet)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3} ", self.game + 1)?;
        match (self.declarer_player, self.result.declaration) {
            (Some(p), Some(decl)) => write!(
                f,
                "P{p} {:<6} {:>5}{}",
                decl.to_string(),
                self.result.decl_value,
                if self.result.overbid { " (overbid)" } else { "" }
            )?,
            _ if self.result.passed => write!(f, "{:<15}", "passed")?,
            _ => write!(f, "{:<15}", "aborted")?,
        }
        for p in &self.players {
            write!(f, " | {:>5}", p.score)?;
        }
        write!(f, " | passes {}", self.cumulative_passes)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: [(&str, &Vec<i32>); 5] = [
            ("score", &self.score),
            ("win/loss", &self.win_loss),
            ("opp. loss", &self.opponent_loss),
            ("timeouts", &self.timeout),
            ("total", &self.total),
        ];
        for (label, values) in rows {
            write!(f, "{label:<19}")?;
            for v in values {
                write!(f, " | {v:>5}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
