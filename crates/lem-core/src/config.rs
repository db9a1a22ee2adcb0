//! Run configuration shared by the scheduler and the binary.

use std::fmt;
use std::str::FromStr;

use crate::{LemError, RoomId};

// ── EdgePolicy ────────────────────────────────────────────────────────────────

/// How tunnel capacity is counted within a single turn.
///
/// | Policy       | Conflict when two tokens in one turn use …             |
/// |--------------|--------------------------------------------------------|
/// | `Directed`   | the same tunnel in the same direction                  |
/// | `Undirected` | the same tunnel in either direction                    |
///
/// Routes in a chosen set are interior-disjoint, so the two policies only
/// differ on farms where tokens could meet head-on; they never change the
/// result of a forward-only schedule.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgePolicy {
    #[default]
    Directed,
    Undirected,
}

impl EdgePolicy {
    /// Key under which the crossing `from → to` is recorded for this turn.
    #[inline]
    pub fn edge_key(self, from: RoomId, to: RoomId) -> (RoomId, RoomId) {
        match self {
            EdgePolicy::Directed => (from, to),
            EdgePolicy::Undirected => (from.min(to), from.max(to)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EdgePolicy::Directed   => "directed",
            EdgePolicy::Undirected => "undirected",
        }
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgePolicy {
    type Err = LemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directed"   => Ok(EdgePolicy::Directed),
            "undirected" => Ok(EdgePolicy::Undirected),
            other => Err(LemError::Config(format!(
                "unknown edge policy {other:?}: expected \"directed\" or \"undirected\""
            ))),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level scheduler configuration.
///
/// Defaults: directed tunnel bookkeeping and no turn limit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Tunnel capacity model used by the movement phase.
    pub edge_policy: EdgePolicy,

    /// Abort with an error after this many turns.  `None` runs until every
    /// token has arrived.
    pub max_turns: Option<u64>,
}

impl SimConfig {
    /// `true` once `turns` turns have been played and a limit forbids more.
    #[inline]
    pub fn limit_reached(&self, turns: u64) -> bool {
        self.max_turns.is_some_and(|limit| turns >= limit)
    }
}
