//! Plain data row types written by output backends.

/// One token entering one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    pub turn:  u64,
    pub token: u32,
    /// Name of the room entered, as given in the input.
    pub room:  String,
}

/// Summary counts for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummaryRow {
    pub turn:    u64,
    pub moves:   u64,
    /// Tokens that reached the sink during this turn.
    pub arrived: u64,
}
