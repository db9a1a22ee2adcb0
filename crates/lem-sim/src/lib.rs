//! `lem-sim` — turn loop for the lem-in scheduler.
//!
//! # Two-phase turn loop
//!
//! ```text
//! until every token has reached the sink:
//!   ① Launch   — each route with queued tokens releases one; it receives
//!                the next TokenId (1, 2, 3, … in launch order).
//!   ② Movement — every token still in flight, in launch order, tries to
//!                advance one room along its route.  It waits if the tunnel
//!                was already crossed this turn or the next room is held
//!                (source and sink hold any number of tokens).
//!   ③ Record   — the turn's moves become one `TurnLog`.
//! ```
//!
//! Route order comes from the `RouteSet` and never changes during a run, so
//! two runs on the same input produce the same log.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the occupancy and tunnel sets.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lem_plan::{ExhaustiveSelector, RouteSelector};
//! use lem_sim::{NoopObserver, SimBuilder};
//!
//! let routes = lem_farm::enumerate_routes(&farm);
//! let plan = ExhaustiveSelector.select(&routes, ant_count)?;
//! let mut sim = SimBuilder::from_plan(&farm, plan).build()?;
//! let schedule = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod schedule;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use schedule::Schedule;
pub use sim::Sim;
