//! skat-replay - rebuild a series from its move logs and print the score sheet.
//!
//! Games in the log file are separated by blank lines; `#` starts a comment.

mod output;
mod telemetry;
mod types;

use std::path::PathBuf;

use clap::Parser;
use skat_engine::{EngineConfig, Series};
use tracing::info;

use output::Report;
use types::{OutputFormat, ViewerArg};

#[derive(Parser)]
#[command(name = "skat-replay")]
#[command(about = "Replay Skat move logs and score the series")]
struct Args {
    /// Move log of the series
    #[arg(short, long)]
    log: PathBuf,

    /// Engine config (JSON); SKAT_* environment variables otherwise
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seats at the table, overriding the config
    #[arg(long)]
    players: Option<usize>,

    /// Game to inspect (1-based)
    #[arg(long, default_value = "1")]
    game: usize,

    /// Print the state of the inspected game after this many moves
    #[arg(long)]
    at: Option<usize>,

    /// Whose view the printed state shows
    #[arg(long, default_value = "world")]
    viewer: ViewerArg,

    /// Print the move log of the inspected game as the viewer received it
    #[arg(long)]
    moves: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::from_env()?,
    };
    if let Some(n) = args.players {
        config.scoring.player_count = n;
        config.validate()?;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    let config = load_config(&args)?;
    let text = std::fs::read_to_string(&args.log)?;
    let (series, errors) = Series::load(config, &text)?;
    info!(
        games = series.games().len(),
        rows = series.sheet().len(),
        "series replayed"
    );

    let viewer = args.viewer.viewer();
    let inspected = if args.at.is_some() || args.moves {
        let k = args.game.checked_sub(1).ok_or("games are numbered from 1")?;
        let game = series
            .game(k)
            .ok_or_else(|| format!("no game {} in {}", args.game, args.log.display()))?;
        Some((k, game))
    } else {
        None
    };
    let snapshot = match (inspected, args.at) {
        (Some((k, game)), Some(index)) => Some((k, game.snapshot_at(index, viewer)?)),
        _ => None,
    };
    let moves = inspected
        .filter(|_| args.moves)
        .map(|(k, game)| (k, game.log_for(viewer)));

    let report = Report {
        series: &series,
        snapshot,
        moves,
        warnings: errors.iter().map(ToString::to_string).collect(),
    };
    output::emit(&report, args.out.as_deref(), &args.format)?;
    Ok(())
}
