//! `lem-plan` — choose which routes to use and how many tokens each gets.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`route_set`]  | `RouteSet` (pairwise interior-disjoint, length-sorted) |
//! | [`estimate`]   | `distribute`, `estimate_turns`                         |
//! | [`selector`]   | `RouteSelector` trait, `ExhaustiveSelector`, `Plan`    |
//! | [`error`]      | `PlanError`, `PlanResult<T>`                           |
//!
//! # Cost model (summary)
//!
//! ```text
//! sort routes by length (tunnels), ascending
//! hand out tokens round-robin over the sorted routes
//! finish(route) = length + tokens(route) − 1      (routes with 0 tokens ignored)
//! estimate      = max finish(route)
//! ```
//!
//! The estimate assumes one launch per route per turn and no waiting behind
//! another route, which holds for interior-disjoint sets.  It is a heuristic:
//! the best-scoring subset is not guaranteed to be the turn-optimal flow.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Scores candidate subsets on Rayon's thread pool.       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `RouteSet`/`Plan`.|

pub mod error;
pub mod estimate;
pub mod route_set;
pub mod selector;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use estimate::{distribute, estimate_turns};
pub use route_set::RouteSet;
pub use selector::{ExhaustiveSelector, Plan, RouteSelector};
