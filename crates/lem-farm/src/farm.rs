//! Farm representation and builder.
//!
//! # Data layout
//!
//! Rooms are stored in definition order and indexed by `RoomId`.  Each room
//! owns an adjacency list in link-insertion order:
//!
//! ```text
//! neighbors(r) = adjacency[r]      // no self entries, no duplicates
//! ```
//!
//! Every link is recorded in both directions, so `b ∈ neighbors(a)` iff
//! `a ∈ neighbors(b)`.  Adjacency order is what route enumeration follows,
//! which makes the whole pipeline deterministic for a given input.

use std::collections::HashMap;

use lem_core::{Coord, RoomId};

use crate::{FarmError, FarmResult};

// ── Farm ──────────────────────────────────────────────────────────────────────

/// Undirected room graph with a distinguished source and sink.
///
/// Immutable once built.  Do not construct directly; use [`FarmBuilder`].
#[derive(Debug, Clone)]
pub struct Farm {
    /// Room names, indexed by `RoomId`.
    pub names: Vec<String>,

    /// Display coordinates, indexed by `RoomId`.
    pub coords: Vec<Coord>,

    adjacency: Vec<Vec<RoomId>>,
    by_name:   HashMap<String, RoomId>,
    source:    RoomId,
    sink:      RoomId,
}

impl Farm {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected tunnels.
    pub fn tunnel_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    // ── Terminals ─────────────────────────────────────────────────────────

    #[inline]
    pub fn source(&self) -> RoomId {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> RoomId {
        self.sink
    }

    /// `true` for the source and the sink, which hold any number of tokens.
    #[inline]
    pub fn is_terminal(&self, room: RoomId) -> bool {
        room == self.source || room == self.sink
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// Name of `room`.
    ///
    /// # Panics
    /// Panics if `room` does not belong to this farm.
    #[inline]
    pub fn name(&self, room: RoomId) -> &str {
        &self.names[room.index()]
    }

    pub fn coord(&self, room: RoomId) -> Coord {
        self.coords[room.index()]
    }

    /// Iterator over every `RoomId` in definition order.
    pub fn rooms(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.names.len()).map(|i| RoomId(i as u32))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Rooms linked to `room`, in link-insertion order.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        &self.adjacency[room.index()]
    }

    pub fn are_linked(&self, a: RoomId, b: RoomId) -> bool {
        self.adjacency
            .get(a.index())
            .is_some_and(|links| links.contains(&b))
    }
}

// ── FarmBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Farm`] incrementally, then call [`build`](Self::build).
///
/// Links can only refer to rooms that were already added.
///
/// # Example
///
/// ```
/// use lem_core::Coord;
/// use lem_farm::FarmBuilder;
///
/// let mut b = FarmBuilder::new();
/// let a = b.add_room("a", Coord::new(0, 0)).unwrap();
/// let z = b.add_room("z", Coord::new(1, 0)).unwrap();
/// assert!(b.link(a, z).unwrap());
/// assert!(!b.link(z, a).unwrap()); // already linked
/// b.set_source(a);
/// b.set_sink(z);
/// let farm = b.build().unwrap();
/// assert_eq!(farm.tunnel_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct FarmBuilder {
    names:     Vec<String>,
    coords:    Vec<Coord>,
    adjacency: Vec<Vec<RoomId>>,
    by_name:   HashMap<String, RoomId>,
    source:    Option<RoomId>,
    sink:      Option<RoomId>,
}

impl FarmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, name: impl Into<String>, coord: Coord) -> FarmResult<RoomId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(FarmError::DuplicateRoom(name));
        }
        let id = RoomId(self.names.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.names.push(name);
        self.coords.push(coord);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Link two rooms in both directions.
    ///
    /// Returns `Ok(false)` if the link already existed; repeated links are
    /// not an error.
    pub fn link(&mut self, a: RoomId, b: RoomId) -> FarmResult<bool> {
        if a.index() >= self.names.len() {
            return Err(FarmError::RoomNotFound(a));
        }
        if b.index() >= self.names.len() {
            return Err(FarmError::RoomNotFound(b));
        }
        if a == b {
            return Err(FarmError::SelfLink(self.names[a.index()].clone()));
        }
        if self.adjacency[a.index()].contains(&b) {
            return Ok(false);
        }
        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
        Ok(true)
    }

    /// Like [`link`](Self::link) but resolves both rooms by name.
    pub fn link_names(&mut self, a: &str, b: &str) -> FarmResult<bool> {
        if a == b {
            return Err(FarmError::SelfLink(a.to_owned()));
        }
        let ra = self.room_id(a).ok_or_else(|| FarmError::UnknownRoom(a.to_owned()))?;
        let rb = self.room_id(b).ok_or_else(|| FarmError::UnknownRoom(b.to_owned()))?;
        self.link(ra, rb)
    }

    /// Designate the source.  A later call replaces an earlier one.
    pub fn set_source(&mut self, room: RoomId) {
        self.source = Some(room);
    }

    /// Designate the sink.  A later call replaces an earlier one.
    pub fn set_sink(&mut self, room: RoomId) {
        self.sink = Some(room);
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    pub fn room_count(&self) -> usize {
        self.names.len()
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Consume the builder and produce a [`Farm`].
    ///
    /// Fails if either terminal is unset or both name the same room.
    pub fn build(self) -> FarmResult<Farm> {
        let source = self.source.ok_or(FarmError::MissingSource)?;
        let sink = self.sink.ok_or(FarmError::MissingSink)?;
        for terminal in [source, sink] {
            if terminal.index() >= self.names.len() {
                return Err(FarmError::RoomNotFound(terminal));
            }
        }
        if source == sink {
            return Err(FarmError::SourceIsSink(self.names[source.index()].clone()));
        }

        Ok(Farm {
            names:     self.names,
            coords:    self.coords,
            adjacency: self.adjacency,
            by_name:   self.by_name,
            source,
            sink,
        })
    }
}
