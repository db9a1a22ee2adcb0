use thiserror::Error;

use lem_farm::FarmError;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid data format, empty input")]
    EmptyInput,

    #[error("invalid data format, invalid number of ants: {0:?}")]
    InvalidAntCount(String),

    #[error("invalid data format, too many ants: {0} (at most 4294967295)")]
    TooManyAnts(String),

    #[error("invalid data format, line {line}: malformed room: {text}")]
    MalformedRoom { line: usize, text: String },

    #[error("invalid data format, line {line}: invalid room name: {name}")]
    InvalidRoomName { line: usize, name: String },

    #[error("invalid data format, line {line}: invalid coordinates in room: {text}")]
    InvalidCoordinates { line: usize, text: String },

    #[error("invalid data format, line {line}: malformed link: {text}")]
    MalformedLink { line: usize, text: String },

    #[error("invalid data format, line {line}: unknown line format: {text}")]
    UnknownLine { line: usize, text: String },

    #[error("invalid data format, missing ##start room")]
    MissingStart,

    #[error("invalid data format, missing ##end room")]
    MissingEnd,

    #[error("invalid data format, line {line}: {source}")]
    Farm {
        line:   usize,
        #[source]
        source: FarmError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;
