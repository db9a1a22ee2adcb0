//! Route-selection error type.

use thiserror::Error;

/// Errors produced by `lem-plan`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("invalid data format, no path from ##start to ##end")]
    NoPathFound,

    #[error("invalid data format, no valid path combination found")]
    Infeasible,

    #[error("token count must be positive")]
    NoTokens,

    #[error("a route set needs at least one route")]
    EmptyRouteSet,

    #[error("routes {first} and {second} share an interior room")]
    NotInteriorDisjoint { first: usize, second: usize },
}

pub type PlanResult<T> = Result<T, PlanError>;
