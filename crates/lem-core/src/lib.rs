//! `lem-core` — foundational types for the lem-in token scheduler.
//!
//! This crate is a dependency of every other `lem-*` crate.  It has no
//! `lem-*` dependencies and a single external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `RoomId`, `TokenId`                                    |
//! | [`coord`]    | `Coord` (integer display coordinates)                  |
//! | [`turn`]     | `Turn`, `MoveEvent`, `TurnLog`                         |
//! | [`config`]   | `SimConfig`, `EdgePolicy`                              |
//! | [`error`]    | `LemError`, `LemResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EdgePolicy, SimConfig};
pub use coord::Coord;
pub use error::{LemError, LemResult};
pub use ids::{RoomId, TokenId};
pub use turn::{MoveEvent, Turn, TurnLog};
