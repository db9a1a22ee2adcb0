//! Discrete time model and per-turn move records.
//!
//! # Design
//!
//! Time is a monotonically increasing `Turn` counter.  Turn 1 is the first
//! turn in which tokens leave the source; `Turn::ZERO` is the state before
//! any move.  All scheduling arithmetic is exact integer arithmetic.

use std::fmt;

use crate::{RoomId, TokenId};

// ── Turn ──────────────────────────────────────────────────────────────────────

/// An absolute simulation turn counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn immediately after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── MoveEvent ─────────────────────────────────────────────────────────────────

/// One token crossing one tunnel during a turn.
///
/// The move log only prints `token` and `to`; `from` is kept so that
/// consumers can check tunnel usage without replaying the route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEvent {
    pub token: TokenId,
    pub from:  RoomId,
    pub to:    RoomId,
}

// ── TurnLog ───────────────────────────────────────────────────────────────────

/// All moves made during one turn, in processing order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnLog {
    pub turn:  Turn,
    pub moves: Vec<MoveEvent>,
}

impl TurnLog {
    pub fn new(turn: Turn) -> Self {
        Self { turn, moves: Vec::new() }
    }

    /// A turn with no moves still counts for timing but prints nothing.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }
}
