//! Route-selection trait and the default exhaustive search.
//!
//! # Pluggability
//!
//! The binary calls selection through the [`RouteSelector`] trait, so a
//! pruned or approximate search can replace [`ExhaustiveSelector`] without
//! touching the scheduler.  Any replacement must keep the selected set and
//! its tie-break identical wherever results are compared against the
//! exhaustive one.
//!
//! # Search order
//!
//! Candidates are generated by a backtracking walk over route indices in
//! enumeration order.  At each step the walk records the current subset,
//! then tries to extend it with every later-indexed route that is
//! interior-disjoint from all routes already chosen:
//!
//! ```text
//! {0} {0,1} {0,1,2} … {0,2} … {1} {1,2} … {2} …
//! ```
//!
//! No subset is produced twice and no interior-conflicting subset is ever
//! built.  The lowest estimate wins; ties keep the subset found first.

use lem_farm::Route;
use tracing::{debug, trace};

use crate::{PlanError, PlanResult, RouteSet, estimate_turns};

// ── Plan ──────────────────────────────────────────────────────────────────────

/// The outcome of route selection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// Chosen routes in launch order.
    pub routes: RouteSet,
    /// Tokens per route, parallel to `routes`.  Sums to the token count.
    pub allocation: Vec<u32>,
    /// Turn estimate of the chosen set.
    pub estimated_turns: u64,
    /// Number of non-empty candidate subsets scored.
    pub candidates_scored: u64,
}

// ── RouteSelector trait ───────────────────────────────────────────────────────

/// Pluggable route-set selection.
///
/// Implementations must be `Send + Sync` so a selector can be shared across
/// threads (the `parallel` feature scores candidates on Rayon's pool).
pub trait RouteSelector: Send + Sync {
    /// Pick the routes to schedule `token_count` tokens on.
    ///
    /// `routes` is the enumeration output; an empty slice fails with
    /// [`PlanError::NoPathFound`].
    fn select(&self, routes: &[Route], token_count: u32) -> PlanResult<Plan>;
}

// ── ExhaustiveSelector ────────────────────────────────────────────────────────

/// Scores every interior-disjoint subset of the enumerated routes.
///
/// Exponential in the number of routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSelector;

impl RouteSelector for ExhaustiveSelector {
    fn select(&self, routes: &[Route], token_count: u32) -> PlanResult<Plan> {
        if routes.is_empty() {
            return Err(PlanError::NoPathFound);
        }
        if token_count == 0 {
            return Err(PlanError::NoTokens);
        }

        debug!(routes = routes.len(), tokens = token_count, "searching route combinations");

        let (best, estimated_turns, candidates_scored) =
            best_subset(routes, token_count).ok_or(PlanError::Infeasible)?;

        let chosen: Vec<Route> = best.iter().map(|&i| routes[i].clone()).collect();
        let route_set = RouteSet::new(chosen)?;
        let allocation = route_set.allocation(token_count);

        debug!(
            chosen = route_set.len(),
            estimated_turns,
            candidates_scored,
            lengths = ?route_set.lengths(),
            "route combination selected"
        );

        Ok(Plan {
            routes: route_set,
            allocation,
            estimated_turns,
            candidates_scored,
        })
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Best subset as route indices, its estimate, and the number of candidates
/// scored.  `None` only if no candidate was produced.
#[cfg(not(feature = "parallel"))]
fn best_subset(routes: &[Route], token_count: u32) -> Option<(Vec<usize>, u64, u64)> {
    let mut best: Option<(Vec<usize>, u64)> = None;
    let mut scored = 0u64;

    for_each_candidate(routes, |subset| {
        scored += 1;
        let turns = score(routes, subset, token_count);
        if best.as_ref().is_none_or(|(_, b)| turns < *b) {
            trace!(?subset, turns, "new best candidate");
            best = Some((subset.to_vec(), turns));
        }
    });

    best.map(|(subset, turns)| (subset, turns, scored))
}

/// Parallel variant: materialise every candidate in walk order, score them
/// on Rayon's pool, then take the first minimum so the tie-break matches the
/// sequential walk.
#[cfg(feature = "parallel")]
fn best_subset(routes: &[Route], token_count: u32) -> Option<(Vec<usize>, u64, u64)> {
    use rayon::prelude::*;

    let mut candidates: Vec<Vec<usize>> = Vec::new();
    for_each_candidate(routes, |subset| candidates.push(subset.to_vec()));

    let scores: Vec<u64> = candidates
        .par_iter()
        .map(|subset| score(routes, subset, token_count))
        .collect();

    let scored = candidates.len() as u64;
    let (best_idx, best_turns) = scores
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|&(i, turns)| (turns, i))?;

    Some((candidates.swap_remove(best_idx), best_turns, scored))
}

fn score(routes: &[Route], subset: &[usize], token_count: u32) -> u64 {
    let lengths: Vec<usize> = subset.iter().map(|&i| routes[i].len()).collect();
    estimate_turns(&lengths, token_count).unwrap_or(u64::MAX)
}

/// Call `visit` once per non-empty interior-disjoint subset, in walk order.
fn for_each_candidate<F: FnMut(&[usize])>(routes: &[Route], visit: F) {
    let room_slots = routes
        .iter()
        .flat_map(|r| r.rooms().iter())
        .map(|room| room.index() + 1)
        .max()
        .unwrap_or(0);

    let mut walk = CandidateWalk {
        routes,
        in_use: vec![false; room_slots],
        chosen: Vec::with_capacity(routes.len()),
        visit,
    };
    walk.extend_from(0);
}

/// Backtracking state: the subset under construction and the interior rooms
/// it already claims.
struct CandidateWalk<'r, F> {
    routes: &'r [Route],
    in_use: Vec<bool>,
    chosen: Vec<usize>,
    visit:  F,
}

impl<F: FnMut(&[usize])> CandidateWalk<'_, F> {
    fn extend_from(&mut self, start: usize) {
        if !self.chosen.is_empty() {
            (self.visit)(&self.chosen);
        }

        let routes = self.routes;
        for (i, route) in routes.iter().enumerate().skip(start) {
            if route.interior().iter().any(|room| self.in_use[room.index()]) {
                continue;
            }
            self.claim(route, true);
            self.chosen.push(i);
            self.extend_from(i + 1);
            self.chosen.pop();
            self.claim(route, false);
        }
    }

    fn claim(&mut self, route: &Route, used: bool) {
        for room in route.interior() {
            self.in_use[room.index()] = used;
        }
    }
}
