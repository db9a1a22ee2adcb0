//! Routes and exhaustive route enumeration.
//!
//! # Cost
//!
//! [`enumerate_routes`] visits every simple path from the source, so its
//! output is exponential in the room count on densely linked farms.  That is
//! accepted: the combination search downstream needs the complete set to
//! find its best subset, and trimming it here would change the result.

use lem_core::RoomId;

use crate::Farm;

// ── Route ─────────────────────────────────────────────────────────────────────

/// A simple path from the source to the sink, as an ordered room list.
///
/// `rooms[0]` is the source, `rooms[len]` is the sink, and no room repeats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    rooms: Vec<RoomId>,
}

impl Route {
    /// Wrap an ordered room list.  The list must hold at least two rooms.
    pub fn new(rooms: Vec<RoomId>) -> Self {
        debug_assert!(rooms.len() >= 2, "a route needs both endpoints");
        Self { rooms }
    }

    /// Number of tunnels crossed (rooms − 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    /// `true` only for a degenerate room list with no tunnel to cross.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every room in travel order, endpoints included.
    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Room at `offset` (0 = first room).
    #[inline]
    pub fn room(&self, offset: usize) -> RoomId {
        self.rooms[offset]
    }

    pub fn first(&self) -> RoomId {
        self.rooms[0]
    }

    pub fn last(&self) -> RoomId {
        self.rooms[self.rooms.len() - 1]
    }

    /// Rooms strictly between the endpoints.
    pub fn interior(&self) -> &[RoomId] {
        match self.rooms.len() {
            0..=2 => &[],
            n => &self.rooms[1..n - 1],
        }
    }

    /// `true` if the two routes share no interior room.  Shared endpoints are
    /// allowed.
    pub fn is_interior_disjoint(&self, other: &Route) -> bool {
        let (small, large) = if self.interior().len() <= other.interior().len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .interior()
            .iter()
            .all(|room| !large.interior().contains(room))
    }

    /// Room names in travel order, for logging and plan export.
    pub fn names<'f>(&self, farm: &'f Farm) -> Vec<&'f str> {
        self.rooms.iter().map(|&r| farm.name(r)).collect()
    }

    /// `true` if each consecutive pair of rooms is linked in `farm`.
    pub fn is_walkable(&self, farm: &Farm) -> bool {
        self.rooms.windows(2).all(|w| farm.are_linked(w[0], w[1]))
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────────

/// Every simple route from `farm.source()` to `farm.sink()`.
///
/// Depth-first over the adjacency lists in link order; a route is recorded as
/// soon as the sink is reached and the search never continues past the sink.
/// Returns an empty `Vec` when the sink is unreachable; the caller decides
/// whether that is an error.
pub fn enumerate_routes(farm: &Farm) -> Vec<Route> {
    let source = farm.source();
    let mut walk = Walk {
        farm,
        visited: vec![false; farm.room_count()],
        path:    vec![source],
        frames:  vec![Frame { room: source, cursor: 0 }],
        found:   Vec::new(),
    };
    walk.visited[source.index()] = true;
    walk.run();
    walk.found
}

/// A room on the current path and the next neighbour to try from it.
#[derive(Clone, Copy)]
struct Frame {
    room:   RoomId,
    cursor: usize,
}

/// Mutable state of one depth-first enumeration.
///
/// The search keeps its own frame stack, so chains of any length are walked
/// without growing the thread stack.
struct Walk<'f> {
    farm:    &'f Farm,
    /// Rooms on the current partial path.
    visited: Vec<bool>,
    path:    Vec<RoomId>,
    frames:  Vec<Frame>,
    found:   Vec<Route>,
}

impl Walk<'_> {
    fn run(&mut self) {
        let farm = self.farm;
        let sink = farm.sink();

        while let Some(frame) = self.frames.last_mut() {
            let Frame { room, cursor } = *frame;
            let Some(&next) = farm.neighbors(room).get(cursor) else {
                // Every neighbour tried: backtrack.
                self.frames.pop();
                self.path.pop();
                self.visited[room.index()] = false;
                continue;
            };
            frame.cursor += 1;

            if self.visited[next.index()] {
                continue;
            }
            self.path.push(next);
            if next == sink {
                self.found.push(Route::new(self.path.clone()));
                self.path.pop();
                continue;
            }
            self.visited[next.index()] = true;
            self.frames.push(Frame { room: next, cursor: 0 });
        }
    }
}
