//! Shared error type.
//!
//! Sub-crates define their own error enums (`FarmError`, `PlanError`, …) and
//! keep them separate; `LemError` covers the few failures that belong to no
//! single stage, such as configuration parsing.

use thiserror::Error;

/// Errors produced by `lem-core`.
#[derive(Debug, Error)]
pub enum LemError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lem-core`.
pub type LemResult<T> = Result<T, LemError>;
