//! The `OutputWriter` trait implemented by all backend writers.

use crate::{MoveRow, OutputResult, TurnSummaryRow};

/// Trait implemented by the move-log and CSV writers.
///
/// Errors are stored by the observer and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the moves of one turn, in processing order.
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()>;

    /// Write one turn summary row.
    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
