//! Line-oriented farm reader.
//!
//! # Line kinds
//!
//! | Line                  | Meaning                                           |
//! |-----------------------|---------------------------------------------------|
//! | first line            | token count (positive integer, at most `u32::MAX`)|
//! | `##start` / `##end`   | the next room line is the source / sink           |
//! | `#…`                  | comment, ignored                                  |
//! | `name x y`            | room (contains whitespace, exactly three fields)  |
//! | `name1-name2`         | tunnel between two rooms defined earlier          |
//! | empty                 | skipped                                           |
//!
//! Room names may not start with `L` (reserved for move-log tokens) or `#`.
//! The whole input and each line are trimmed before classification, and line
//! numbers in errors are 1-based positions in the trimmed input.

use std::io::Read;
use std::num::IntErrorKind;
use std::path::Path;

use lem_core::Coord;
use lem_farm::{Farm, FarmBuilder, FarmError};

use crate::{ParseError, ParseResult};

const START_MARKER: &str = "##start";
const END_MARKER: &str = "##end";

/// A fully validated farm plus the number of tokens to move through it.
#[derive(Debug, Clone)]
pub struct FarmInput {
    pub farm:      Farm,
    pub ant_count: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a farm description from a file.
pub fn load_farm(path: &Path) -> ParseResult<FarmInput> {
    let file = std::fs::File::open(path).map_err(ParseError::Io)?;
    load_farm_reader(file)
}

/// Like [`load_farm`] but accepts any `Read` source.
pub fn load_farm_reader<R: Read>(mut reader: R) -> ParseResult<FarmInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_farm(&text)
}

/// Parse farm-description text.
pub fn parse_farm(text: &str) -> ParseResult<FarmInput> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut lines = trimmed.lines().map(str::trim).enumerate().map(|(i, l)| (i + 1, l));

    let (_, first) = lines.next().ok_or(ParseError::EmptyInput)?;
    let ant_count = parse_ant_count(first)?;

    let mut state = ReaderState::default();
    for (line_no, line) in lines {
        state.consume(line_no, line)?;
    }

    if !state.builder.has_source() {
        return Err(ParseError::MissingStart);
    }
    if !state.builder.has_sink() {
        return Err(ParseError::MissingEnd);
    }

    let last_line = trimmed.lines().count();
    let farm = state
        .builder
        .build()
        .map_err(|source| ParseError::Farm { line: last_line, source })?;

    Ok(FarmInput { farm, ant_count })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Positive count that fits a `TokenId`; larger counts get their own error.
fn parse_ant_count(line: &str) -> ParseResult<u32> {
    match line.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(ParseError::TooManyAnts(line.to_owned()))
        }
        _ => Err(ParseError::InvalidAntCount(line.to_owned())),
    }
}

/// Builder plus the pending terminal markers.
#[derive(Default)]
struct ReaderState {
    builder:      FarmBuilder,
    expect_start: bool,
    expect_end:   bool,
}

impl ReaderState {
    fn consume(&mut self, line_no: usize, line: &str) -> ParseResult<()> {
        if line.is_empty() {
            return Ok(());
        }

        if line.starts_with('#') {
            match line {
                START_MARKER => self.expect_start = true,
                END_MARKER   => self.expect_end = true,
                _ => {}
            }
            return Ok(());
        }

        if line.contains(char::is_whitespace) {
            self.room(line_no, line)
        } else if line.contains('-') {
            self.link(line_no, line)
        } else {
            Err(ParseError::UnknownLine { line: line_no, text: line.to_owned() })
        }
    }

    fn room(&mut self, line_no: usize, line: &str) -> ParseResult<()> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[name, x, y] = fields.as_slice() else {
            return Err(ParseError::MalformedRoom { line: line_no, text: line.to_owned() });
        };

        if name.starts_with('L') || name.starts_with('#') {
            return Err(ParseError::InvalidRoomName { line: line_no, name: name.to_owned() });
        }
        if self.builder.room_id(name).is_some() {
            return Err(ParseError::Farm {
                line:   line_no,
                source: FarmError::DuplicateRoom(name.to_owned()),
            });
        }

        let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
            return Err(ParseError::InvalidCoordinates { line: line_no, text: line.to_owned() });
        };

        let id = self
            .builder
            .add_room(name, Coord::new(x, y))
            .map_err(|source| ParseError::Farm { line: line_no, source })?;

        if self.expect_start && self.expect_end {
            return Err(ParseError::Farm {
                line:   line_no,
                source: FarmError::SourceIsSink(name.to_owned()),
            });
        }
        if self.expect_start {
            self.builder.set_source(id);
            self.expect_start = false;
        }
        if self.expect_end {
            self.builder.set_sink(id);
            self.expect_end = false;
        }
        Ok(())
    }

    fn link(&mut self, line_no: usize, line: &str) -> ParseResult<()> {
        let parts: Vec<&str> = line.split('-').collect();
        let &[from, to] = parts.as_slice() else {
            return Err(ParseError::MalformedLink { line: line_no, text: line.to_owned() });
        };

        self.builder
            .link_names(from, to)
            .map(|_| ())
            .map_err(|source| ParseError::Farm { line: line_no, source })
    }
}
