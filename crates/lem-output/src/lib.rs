//! `lem-output` — writers for lem-in runs.
//!
//! | Writer            | Destination                                  |
//! |-------------------|----------------------------------------------|
//! | [`MoveLogWriter`] | any `io::Write`: the `L<id>-<room>` move log |
//! | [`CsvWriter`]     | `moves.csv`, `turn_summaries.csv`            |
//!
//! Both implement [`OutputWriter`] and can be driven by
//! [`SimOutputObserver`], which implements `lem_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lem_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let schedule = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod move_log;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use move_log::{MoveLogWriter, format_move, render_turn};
pub use observer::SimOutputObserver;
pub use row::{MoveRow, TurnSummaryRow};
pub use writer::OutputWriter;
