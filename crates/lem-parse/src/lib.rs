//! `lem-parse` — farm-description reader.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`reader`]  | `FarmInput`, `parse_farm`, `load_farm`, `load_farm_reader`|
//! | [`error`]   | `ParseError`, `ParseResult<T>`                            |
//!
//! # Input format (summary)
//!
//! ```text
//! 3              ← token count, positive integer
//! ##start
//! a 0 0          ← room: name x y
//! ##end
//! b 4 0
//! c 2 1
//! a-c            ← tunnel: name-name
//! c-b
//! # comment
//! ```
//!
//! Every error is terminal: no partial farm is ever returned.

pub mod error;
pub mod reader;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseResult};
pub use reader::{FarmInput, load_farm, load_farm_reader, parse_farm};
