//! The `Sim` struct and its turn loop.

use lem_core::{MoveEvent, RoomId, SimConfig, TokenId, Turn, TurnLog};
use lem_farm::Farm;
use lem_plan::RouteSet;
use tracing::{debug, trace};

use crate::{Schedule, SimError, SimObserver, SimResult};

// ── Per-run sets ──────────────────────────────────────────────────────────────

#[cfg(feature = "fx-hash")]
type RoomSet = rustc_hash::FxHashSet<RoomId>;
#[cfg(not(feature = "fx-hash"))]
type RoomSet = std::collections::HashSet<RoomId>;

#[cfg(feature = "fx-hash")]
type TunnelSet = rustc_hash::FxHashSet<(RoomId, RoomId)>;
#[cfg(not(feature = "fx-hash"))]
type TunnelSet = std::collections::HashSet<(RoomId, RoomId)>;

// ── Token ─────────────────────────────────────────────────────────────────────

/// A launched token.  Its route never changes; `offset` only grows.
#[derive(Debug, Clone, Copy)]
struct Token {
    id:     TokenId,
    /// Index into the `RouteSet`.
    route:  usize,
    /// Position along the route: 0 = source, `route.len()` = sink.
    offset: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The turn-based scheduler.
///
/// `Sim` owns all run state: per-route launch queues, tokens in flight, the
/// set of occupied interior rooms, and the launch-id counter.  None of it is
/// shared between runs, so two `Sim`s built from the same inputs produce the
/// same schedule.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<'f> {
    /// Run configuration (tunnel policy, optional turn cap).
    pub config: SimConfig,

    /// The last completed turn; `Turn::ZERO` before the first step.
    pub turn: Turn,

    farm:     &'f Farm,
    routes:   RouteSet,
    /// Tokens still waiting at the source, per route.
    queued:   Vec<u32>,
    /// Launched tokens not yet at the sink, in launch order.
    active:   Vec<Token>,
    /// Interior rooms currently holding a token.
    occupied: RoomSet,
    next_id:  TokenId,
    finished: u32,
    total:    u32,
}

impl<'f> Sim<'f> {
    pub(crate) fn new(
        config: SimConfig,
        farm:   &'f Farm,
        routes: RouteSet,
        queued: Vec<u32>,
        total:  u32,
    ) -> Self {
        Self {
            config,
            turn: Turn::ZERO,
            farm,
            routes,
            queued,
            active: Vec::new(),
            occupied: RoomSet::default(),
            next_id: TokenId::FIRST,
            finished: 0,
            total,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Play turns until every token has reached the sink.
    ///
    /// Calls observer hooks at every turn boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// Fails only when `config.max_turns` is set and reached first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Schedule> {
        debug!(
            tokens = self.total,
            routes = self.routes.len(),
            policy = %self.config.edge_policy,
            "simulation started"
        );

        let mut turns = Vec::new();
        while !self.is_finished() {
            if self.config.limit_reached(self.turn.0) {
                return Err(SimError::TurnLimit {
                    limit:    self.turn.0,
                    finished: self.finished,
                    total:    self.total,
                });
            }
            observer.on_turn_start(self.turn.next());
            let log = self.step();
            observer.on_turn_end(&log, self.farm);
            turns.push(log);
        }
        observer.on_sim_end(self.turn);

        debug!(turns = self.turn.0, "simulation finished");
        Ok(Schedule { turns, token_count: self.total })
    }

    /// Play exactly one turn and return its moves.
    ///
    /// Useful for tests and incremental stepping.  Calling `step` after the
    /// run has finished returns an empty log for the next turn.
    pub fn step(&mut self) -> TurnLog {
        let turn = self.turn.next();
        self.launch();
        let log = self.advance(turn);
        self.active.retain(|t| t.offset < self.routes.routes()[t.route].len());
        self.turn = turn;

        trace!(%turn, moves = log.len(), finished = self.finished, "turn complete");
        log
    }

    pub fn is_finished(&self) -> bool {
        self.finished >= self.total
    }

    /// Tokens that have reached the sink.
    pub fn finished(&self) -> u32 {
        self.finished
    }

    /// Launched tokens not yet at the sink.
    pub fn in_flight(&self) -> usize {
        self.active.len()
    }

    /// Tokens still waiting at the source.
    pub fn queued(&self) -> u32 {
        self.queued.iter().sum()
    }

    pub fn is_occupied(&self, room: RoomId) -> bool {
        self.occupied.contains(&room)
    }

    /// Number of interior rooms holding a token right now.
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    pub fn farm(&self) -> &'f Farm {
        self.farm
    }

    // ── Turn phases ───────────────────────────────────────────────────────

    /// Launch phase: at most one token per route, in route order.
    fn launch(&mut self) {
        for (route, waiting) in self.queued.iter_mut().enumerate() {
            if *waiting == 0 {
                continue;
            }
            *waiting -= 1;
            self.active.push(Token { id: self.next_id, route, offset: 0 });
            self.next_id = self.next_id.next();
        }
    }

    /// Movement phase: each in-flight token, in launch order, advances one
    /// room unless its tunnel is taken this turn or the next room is held.
    fn advance(&mut self, turn: Turn) -> TurnLog {
        let mut log = TurnLog::new(turn);
        let mut crossed = TunnelSet::default();
        let farm = self.farm;
        let policy = self.config.edge_policy;

        for token in self.active.iter_mut() {
            let route = &self.routes.routes()[token.route];
            if token.offset >= route.len() {
                continue;
            }

            let current = route.room(token.offset);
            let next = route.room(token.offset + 1);
            let tunnel = policy.edge_key(current, next);

            if crossed.contains(&tunnel) {
                continue;
            }
            if !farm.is_terminal(next) && self.occupied.contains(&next) {
                continue;
            }

            if !farm.is_terminal(current) {
                self.occupied.remove(&current);
            }
            crossed.insert(tunnel);
            token.offset += 1;
            if !farm.is_terminal(next) {
                self.occupied.insert(next);
            }

            log.moves.push(MoveEvent { token: token.id, from: current, to: next });
            if next == farm.sink() {
                self.finished += 1;
            }
        }
        log
    }
}
