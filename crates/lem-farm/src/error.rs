//! Farm-construction error type.

use thiserror::Error;

use lem_core::RoomId;

/// Errors produced by `lem-farm`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FarmError {
    #[error("duplicate room name: {0}")]
    DuplicateRoom(String),

    #[error("link references unknown room: {0}")]
    UnknownRoom(String),

    #[error("self-linked room: {0}")]
    SelfLink(String),

    #[error("room {0} not found in farm")]
    RoomNotFound(RoomId),

    #[error("missing ##start room")]
    MissingSource,

    #[error("missing ##end room")]
    MissingSink,

    #[error("room {0} is both ##start and ##end")]
    SourceIsSink(String),
}

pub type FarmResult<T> = Result<T, FarmError>;
