//! A series of games and its score sheet, kept consistent under one lock.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::domain::moves::Move;
use crate::errors::domain::DomainError;
use crate::game::projection::Game;
use crate::scoring::score_sheet::{Row, ScoreSheet, Summary};

#[derive(Debug, Clone)]
pub struct Series {
    config: EngineConfig,
    games: Vec<Game>,
    sheet: ScoreSheet,
}

impl Series {
    pub fn new(config: EngineConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            config,
            games: Vec::new(),
            sheet: ScoreSheet::new(config.scoring)?,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game(&self, k: usize) -> Option<&Game> {
        self.games.get(k)
    }

    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    pub fn summary(&self) -> Summary {
        self.sheet.summary()
    }

    /// Start a new, empty game and return its number.
    pub fn new_game(&mut self) -> usize {
        self.games.push(Game::new(self.config.table_rules()));
        self.games.len() - 1
    }

    /// Add a recorded game; a finished one is scored right away.
    pub fn push_game(&mut self, game: Game) -> Result<usize, DomainError> {
        self.games.push(game);
        let k = self.games.len() - 1;
        if self.games[k].is_finished() {
            self.finish_game(k)?;
        }
        Ok(k)
    }

    fn game_mut(&mut self, k: usize) -> Result<&mut Game, DomainError> {
        self.games
            .get_mut(k)
            .ok_or_else(|| DomainError::not_found(format!("game {k}")))
    }

    /// Append a move to game `k`, scoring the game if the move ends it.
    pub fn append(&mut self, k: usize, mv: Move) -> Result<usize, DomainError> {
        let index = self.game_mut(k)?.append(mv)?;
        if self.games[k].is_finished() {
            self.finish_game(k)?;
        }
        Ok(index)
    }

    /// Row of finished game `k`, appending it if it is not there yet.
    pub fn finish_game(&mut self, k: usize) -> Result<Row, DomainError> {
        if let Some(row) = self.sheet.row_for_game(k) {
            return Ok(row.clone());
        }
        let game = self
            .games
            .get(k)
            .ok_or_else(|| DomainError::not_found(format!("game {k}")))?;
        if game.result().is_none() {
            return Err(DomainError::not_found(format!("game {k} is not finished")));
        }
        self.rescore_from(k)?;
        self.sheet
            .row_for_game(k)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("row for game {k}")))
    }

    /// Prune game `k` to its first `len` moves and recompute every row from
    /// game `k` on.
    pub fn prune_game(&mut self, k: usize, len: usize) -> Result<(), DomainError> {
        self.game_mut(k)?.prune(len)?;
        self.rescore_from(k)?;
        info!(game = k, len, rows = self.sheet.len(), "series rescored after prune");
        Ok(())
    }

    /// Drop rows of games `>= k` and re-add the rows of finished games.
    fn rescore_from(&mut self, k: usize) -> Result<(), DomainError> {
        self.sheet.truncate_from_game(k);
        for (g, game) in self.games.iter().enumerate().skip(k) {
            if let Some(result) = game.result() {
                self.sheet.append(g, result.clone())?;
            }
        }
        Ok(())
    }

    /// Load every game of a multi-game log text. Games that stop early are
    /// kept with their valid prefix; their errors are returned alongside.
    pub fn load(config: EngineConfig, text: &str) -> Result<(Self, Vec<DomainError>), DomainError> {
        let mut series = Self::new(config)?;
        let mut warnings = Vec::new();
        for (k, chunk) in crate::game::move_log::split_games(text).iter().enumerate() {
            let (game, err) = Game::load(config.table_rules(), chunk);
            if let Some(e) = err {
                warn!(game = k, error = %e, "game loaded partially");
                warnings.push(e);
            }
            series.push_game(game)?;
        }
        Ok((series, warnings))
    }
}

/// Thread-safe series: every mutation, including "score the finished game",
/// happens in one critical section.
#[derive(Debug, Clone)]
pub struct SeriesHandle {
    inner: Arc<Mutex<Series>>,
}

impl SeriesHandle {
    pub fn new(series: Series) -> Self {
        Self {
            inner: Arc::new(Mutex::new(series)),
        }
    }

    pub fn new_game(&self) -> usize {
        self.inner.lock().new_game()
    }

    pub fn append(&self, k: usize, mv: Move) -> Result<usize, DomainError> {
        self.inner.lock().append(k, mv)
    }

    pub fn finish_game(&self, k: usize) -> Result<Row, DomainError> {
        self.inner.lock().finish_game(k)
    }

    pub fn prune_game(&self, k: usize, len: usize) -> Result<(), DomainError> {
        self.inner.lock().prune_game(k, len)
    }

    pub fn sheet(&self) -> ScoreSheet {
        self.inner.lock().sheet().clone()
    }

    pub fn summary(&self) -> Summary {
        self.inner.lock().summary()
    }

    /// Copy of game `k` for lock-free queries.
    pub fn freeze_game(&self, k: usize) -> Option<Game> {
        self.inner.lock().game(k).cloned()
    }

    pub fn with_series<R>(&self, f: impl FnOnce(&mut Series) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
