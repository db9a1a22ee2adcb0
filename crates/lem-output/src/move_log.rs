//! The textual move log.
//!
//! ```text
//! <input, echoed verbatim>
//!
//! L1-c L2-d
//! L1-b L2-b L3-c
//! ```
//!
//! One line per turn with at least one move.  Each move is `L<token>-<room>`
//! and moves are separated by single spaces in processing order.

use std::io::Write;

use lem_core::{TokenId, TurnLog};
use lem_farm::Farm;
use lem_sim::Schedule;

use crate::{MoveRow, OutputResult, TurnSummaryRow};
use crate::writer::OutputWriter;

/// `L<token>-<room>`.
pub fn format_move(token: TokenId, room: &str) -> String {
    format!("L{}-{}", token.0, room)
}

/// Render one turn as a log line without the trailing newline.
///
/// Returns an empty string for a turn without moves.
pub fn render_turn(log: &TurnLog, farm: &Farm) -> String {
    log.moves
        .iter()
        .map(|m| format_move(m.token, farm.name(m.to)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the echo and the move log to any [`Write`] sink.
///
/// Callers that must not emit a partial log write into a `Vec<u8>` and copy
/// it out with [`into_inner`][Self::into_inner] once the run has succeeded.
pub struct MoveLogWriter<W: Write> {
    out:   W,
    lines: usize,
}

impl<W: Write> MoveLogWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Echo the farm description, then one blank line.
    ///
    /// A newline is added first if `text` does not already end with one.
    pub fn echo_input(&mut self, text: &str) -> OutputResult<()> {
        self.out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Write one turn; turns without moves print nothing.
    pub fn write_turn(&mut self, log: &TurnLog, farm: &Farm) -> OutputResult<()> {
        if log.is_empty() {
            return Ok(());
        }
        self.write_line(&render_turn(log, farm))
    }

    /// Write every turn of a finished run.
    pub fn write_schedule(&mut self, schedule: &Schedule, farm: &Farm) -> OutputResult<()> {
        for log in &schedule.turns {
            self.write_turn(log, farm)?;
        }
        Ok(())
    }

    /// Move-log lines written so far (the echo is not counted).
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) -> OutputResult<()> {
        writeln!(self.out, "{line}")?;
        self.lines += 1;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MoveLogWriter<W> {
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let line = rows
            .iter()
            .map(|row| format_move(TokenId(row.token), &row.room))
            .collect::<Vec<_>>()
            .join(" ");
        self.write_line(&line)
    }

    fn write_turn_summary(&mut self, _row: &TurnSummaryRow) -> OutputResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
