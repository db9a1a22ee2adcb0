//! Room coordinates.
//!
//! Coordinates are carried through from the farm description for display
//! (the move log consumer draws rooms with them).  They never influence route
//! enumeration, selection, or scheduling.

/// Integer `(x, y)` position of a room.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
