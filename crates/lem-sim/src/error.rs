use lem_plan::PlanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("token count must be positive")]
    NoTokens,

    #[error("route {index} is not usable in this farm: {reason}")]
    InvalidRoute {
        index:  usize,
        reason: &'static str,
    },

    #[error("turn limit {limit} reached with {finished} of {total} tokens at the sink")]
    TurnLimit {
        limit:    u64,
        finished: u32,
        total:    u32,
    },

    #[error("route set rejected: {0}")]
    Plan(#[from] PlanError),
}

pub type SimResult<T> = Result<T, SimError>;
