//! `RouteSet` — the routes a schedule runs on.

use lem_farm::Route;

use crate::{PlanError, PlanResult, distribute, estimate_turns};

/// Non-empty collection of pairwise interior-disjoint routes, ordered by
/// ascending length (ties keep the order they were supplied in).
///
/// This order is the one the estimator deals tokens in and the one the
/// scheduler launches and moves tokens in.  It is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Validate and order `routes`.
    ///
    /// Fails with [`PlanError::EmptyRouteSet`] for an empty list and with
    /// [`PlanError::NotInteriorDisjoint`] (indices into `routes`) when two
    /// routes share an interior room.
    pub fn new(mut routes: Vec<Route>) -> PlanResult<Self> {
        if routes.is_empty() {
            return Err(PlanError::EmptyRouteSet);
        }
        for (i, a) in routes.iter().enumerate() {
            for (j, b) in routes.iter().enumerate().skip(i + 1) {
                if !a.is_interior_disjoint(b) {
                    return Err(PlanError::NotInteriorDisjoint { first: i, second: j });
                }
            }
        }
        routes.sort_by_key(Route::len);
        Ok(Self { routes })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    /// Tunnel count of each route, in set order.
    pub fn lengths(&self) -> Vec<usize> {
        self.routes.iter().map(Route::len).collect()
    }

    /// Tokens per route for `token_count` tokens, in set order.
    pub fn allocation(&self, token_count: u32) -> Vec<u32> {
        distribute(token_count, self.routes.len())
    }

    /// Estimated turns for `token_count` tokens.
    pub fn estimate(&self, token_count: u32) -> u64 {
        estimate_turns(&self.lengths(), token_count).unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a RouteSet {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
