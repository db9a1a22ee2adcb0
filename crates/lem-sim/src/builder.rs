//! Fluent builder for constructing a [`Sim`].

use lem_core::SimConfig;
use lem_farm::{Farm, Route};
use lem_plan::{Plan, RouteSet};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - `&Farm`: the graph the routes run through
/// - [`RouteSet`]: the interior-disjoint routes, in launch order
/// - token count
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                  |
/// |---------------|------------------------------------------|
/// | `.config(c)`  | `SimConfig::default()` (directed, no cap)|
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&farm, route_set, 10)
///     .config(SimConfig { max_turns: Some(1_000), ..Default::default() })
///     .build()?;
/// let schedule = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'f> {
    farm:        &'f Farm,
    routes:      RouteSet,
    token_count: u32,
    config:      Option<SimConfig>,
}

impl<'f> SimBuilder<'f> {
    /// Create a builder with all required inputs.
    pub fn new(farm: &'f Farm, routes: RouteSet, token_count: u32) -> Self {
        Self { farm, routes, token_count, config: None }
    }

    /// Start from a selected [`Plan`]; the token count is the plan's total
    /// allocation.
    pub fn from_plan(farm: &'f Farm, plan: Plan) -> Self {
        let token_count = plan.allocation.iter().sum();
        Self::new(farm, plan.routes, token_count)
    }

    /// Start from a raw route list, validating it into a [`RouteSet`].
    pub fn from_routes(farm: &'f Farm, routes: Vec<Route>, token_count: u32) -> SimResult<Self> {
        Ok(Self::new(farm, RouteSet::new(routes)?, token_count))
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate inputs, split tokens over the routes, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<'f>> {
        let config = self.config.unwrap_or_default();
        if config.max_turns == Some(0) {
            return Err(SimError::Config("max_turns must be positive when set".into()));
        }
        if self.token_count == 0 {
            return Err(SimError::NoTokens);
        }

        // ── Every route must run source → sink over real tunnels ──────────
        for (index, route) in self.routes.iter().enumerate() {
            if route.rooms().iter().any(|r| r.index() >= self.farm.room_count()) {
                return Err(SimError::InvalidRoute { index, reason: "room outside the farm" });
            }
            if route.first() != self.farm.source() {
                return Err(SimError::InvalidRoute { index, reason: "does not start at the source" });
            }
            if route.last() != self.farm.sink() {
                return Err(SimError::InvalidRoute { index, reason: "does not end at the sink" });
            }
            if !route.is_walkable(self.farm) {
                return Err(SimError::InvalidRoute { index, reason: "crosses a missing tunnel" });
            }
        }

        let queued = self.routes.allocation(self.token_count);
        Ok(Sim::new(config, self.farm, self.routes, queued, self.token_count))
    }
}
