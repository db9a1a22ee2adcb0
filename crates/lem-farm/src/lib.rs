//! `lem-farm` — farm graph and route enumeration.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`farm`]    | `Farm` (rooms + undirected adjacency), `FarmBuilder`        |
//! | [`paths`]   | `Route`, `enumerate_routes`                                 |
//! | [`error`]   | `FarmError`, `FarmResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Route`.                |

pub mod error;
pub mod farm;
pub mod paths;


pub use error::{FarmError, FarmResult};
pub use farm::{Farm, FarmBuilder};
pub use paths::{Route, enumerate_routes};
