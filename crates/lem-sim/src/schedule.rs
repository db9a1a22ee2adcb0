//! The result of a completed run.

use lem_core::{Turn, TurnLog};

/// Every turn of a run, in order, including turns without moves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    pub turns:       Vec<TurnLog>,
    pub token_count: u32,
}

impl Schedule {
    /// Number of turns played until the last arrival.
    pub fn turn_count(&self) -> u64 {
        self.turns.len() as u64
    }

    /// The turn in which the last token arrived (`Turn::ZERO` if none ran).
    pub fn final_turn(&self) -> Turn {
        self.turns.last().map_or(Turn::ZERO, |log| log.turn)
    }

    /// Lines the move log prints: turns with at least one move.
    pub fn printed_lines(&self) -> usize {
        self.turns.iter().filter(|log| !log.is_empty()).count()
    }

    /// Total moves across all turns.
    pub fn move_count(&self) -> usize {
        self.turns.iter().map(TurnLog::len).sum()
    }
}
