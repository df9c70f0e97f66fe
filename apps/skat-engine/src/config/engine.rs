use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::state::TableRules;
use crate::errors::domain::DomainError;

/// Score-sheet summary weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Per game won minus game lost as declarer.
    pub decl_win_points: i32,
    /// Per opponent's lost game at a three-seat table.
    pub def3_win_points: i32,
    /// Per opponent's lost game at a four-seat table.
    pub def4_win_points: i32,
    /// Per timeout or departure.
    pub penalty_points: i32,
    /// Seats at the table (the dealer sits out at four).
    pub player_count: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            decl_win_points: 50,
            def3_win_points: 40,
            def4_win_points: 30,
            penalty_points: 100,
            player_count: 3,
        }
    }
}

impl ScoringConfig {
    /// Points for each game lost by another player.
    pub fn opponent_loss_points(&self) -> i32 {
        if self.player_count == 3 {
            self.def3_win_points
        } else {
            self.def4_win_points
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !(3..=4).contains(&self.player_count) {
            return Err(DomainError::config(format!(
                "player count must be 3 or 4, got {}",
                self.player_count
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    /// Seconds a seat may think before the world records a timeout.
    pub idle_timeout_secs: u64,
    /// Reject bids that are not on the official ladder.
    pub strict_bids: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            idle_timeout_secs: 240,
            strict_bids: true,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `SKAT_*` environment variables.
    pub fn from_env() -> Result<Self, DomainError> {
        let mut config = Self::default();
        if let Some(n) = parsed_var::<usize>("SKAT_PLAYER_COUNT")? {
            config.scoring.player_count = n;
        }
        if let Some(p) = parsed_var::<i32>("SKAT_PENALTY_POINTS")? {
            config.scoring.penalty_points = p;
        }
        if let Some(secs) = parsed_var::<u64>("SKAT_IDLE_TIMEOUT_SECS")? {
            config.idle_timeout_secs = secs;
        }
        if let Some(strict) = parsed_var::<bool>("SKAT_STRICT_BIDS")? {
            config.strict_bids = strict;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::config(format!("invalid engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.scoring.validate()?;
        if self.idle_timeout_secs == 0 {
            return Err(DomainError::config("idle timeout must be positive"));
        }
        Ok(())
    }

    pub fn table_rules(&self) -> TableRules {
        TableRules {
            strict_bids: self.strict_bids,
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// Read and parse an optional environment variable.
fn parsed_var<T>(name: &str) -> Result<Option<T>, DomainError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| DomainError::config(format!("{name}='{raw}': {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(DomainError::config(format!("{name}: {e}"))),
    }
}
