//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lem_core::{Turn, TurnLog};
use lem_farm::Farm;
use lem_sim::{Schedule, SimObserver};

use crate::row::{MoveRow, TurnSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every turn's moves and a per-turn summary to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Feed a finished run through the writer, turn by turn, as if it were
    /// observed live.  Nothing reaches the writer for runs that failed.
    pub fn replay(&mut self, schedule: &Schedule, farm: &Farm) {
        for log in &schedule.turns {
            self.on_turn_start(log.turn);
            self.on_turn_end(log, farm);
        }
        self.on_sim_end(schedule.final_turn());
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_turn_end(&mut self, log: &TurnLog, farm: &Farm) {
        let rows: Vec<MoveRow> = log
            .moves
            .iter()
            .map(|m| MoveRow {
                turn:  log.turn.0,
                token: m.token.0,
                room:  farm.name(m.to).to_owned(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_moves(&rows);
            self.store_err(result);
        }

        let arrived = log.moves.iter().filter(|m| m.to == farm.sink()).count();
        let summary = TurnSummaryRow {
            turn:    log.turn.0,
            moves:   rows.len() as u64,
            arrived: arrived as u64,
        };
        let result = self.writer.write_turn_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_turn: Turn) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
