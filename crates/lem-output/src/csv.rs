//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `moves.csv`
//! - `turn_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{MoveRow, OutputResult, TurnSummaryRow};
use crate::writer::OutputWriter;

/// Writes run output to two CSV files.
pub struct CsvWriter {
    moves:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut moves = Writer::from_path(dir.join("moves.csv"))?;
        moves.write_record(["turn", "token", "room"])?;

        let mut summaries = Writer::from_path(dir.join("turn_summaries.csv"))?;
        summaries.write_record(["turn", "moves", "arrived"])?;

        Ok(Self { moves, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            self.moves.write_record([
                row.turn.to_string().as_str(),
                row.token.to_string().as_str(),
                row.room.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.turn.to_string(),
            row.moves.to_string(),
            row.arrived.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
