//! Simulation observer trait for progress reporting and output writing.

use lem_core::{Turn, TurnLog};
use lem_farm::Farm;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at each turn boundary.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_turn_end(&mut self, log: &TurnLog, _farm: &Farm) {
///         eprintln!("{}: {} moves", log.turn, log.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the launch phase of `turn`.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called once the turn's moves are final.
    ///
    /// `farm` resolves `RoomId`s to names for writers that print them.
    fn on_turn_end(&mut self, _log: &TurnLog, _farm: &Farm) {}

    /// Called once after the last token reaches the sink.
    fn on_sim_end(&mut self, _final_turn: Turn) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
