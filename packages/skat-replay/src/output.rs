//! Report rendering for replayed series.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use skat_engine::{Series, StateSnapshot, Summary};

use crate::types::OutputFormat;

/// One line of the JSON report.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ReportLine<'a> {
    Snapshot {
        game: usize,
        snapshot: &'a StateSnapshot,
    },
    Move {
        game: usize,
        index: usize,
        text: &'a str,
    },
    Row {
        row: &'a skat_engine::Row,
    },
    Summary {
        summary: &'a Summary,
    },
    Warning {
        message: String,
    },
}

pub struct Report<'a> {
    pub series: &'a Series,
    pub snapshot: Option<(usize, StateSnapshot)>,
    /// Move log of one game as a viewer saw it.
    pub moves: Option<(usize, Vec<String>)>,
    pub warnings: Vec<String>,
}

impl Report<'_> {
    pub fn write_to(
        &self,
        out: &mut dyn Write,
        format: &OutputFormat,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Jsonl => self.write_jsonl(out),
        }
    }

    fn write_text(&self, out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
        for w in &self.warnings {
            writeln!(out, "warning: {w}")?;
        }
        if let Some((game, snap)) = &self.snapshot {
            writeln!(out, "game {} after {} moves:", game + 1, snap.index)?;
            writeln!(out, "{}", serde_json::to_string_pretty(snap)?)?;
        }
        if let Some((game, moves)) = &self.moves {
            writeln!(out, "game {} moves:", game + 1)?;
            for line in moves {
                writeln!(out, "  {line}")?;
            }
        }
        for row in self.series.sheet().rows() {
            writeln!(out, "{row}")?;
        }
        write!(out, "{}", self.series.summary())?;
        Ok(())
    }

    fn write_jsonl(&self, out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
        let summary = self.series.summary();
        let mut lines = Vec::new();
        for w in &self.warnings {
            lines.push(ReportLine::Warning { message: w.clone() });
        }
        if let Some((game, snap)) = &self.snapshot {
            lines.push(ReportLine::Snapshot {
                game: *game,
                snapshot: snap,
            });
        }
        if let Some((game, moves)) = &self.moves {
            for (index, text) in moves.iter().enumerate() {
                lines.push(ReportLine::Move {
                    game: *game,
                    index,
                    text,
                });
            }
        }
        for row in self.series.sheet().rows() {
            lines.push(ReportLine::Row { row });
        }
        lines.push(ReportLine::Summary { summary: &summary });

        for line in &lines {
            writeln!(out, "{}", serde_json::to_string(line)?)?;
        }
        Ok(())
    }
}

/// Write to `path`, or stdout when none is given.
pub fn emit(
    report: &Report<'_>,
    path: Option<&Path>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)?;
            let mut writer = BufWriter::new(file);
            report.write_to(&mut writer, format)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            report.write_to(&mut lock, format)?;
        }
    }
    Ok(())
}
