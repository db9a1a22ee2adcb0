//! Unit tests for lem-parse.

#[cfg(test)]
mod helpers {
    /// Join lines with `\n`, the way a farm file is laid out on disk.
    pub fn text(lines: &[&str]) -> String {
        lines.join("\n")
    }
}

// ── Valid input ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod valid {
    use lem_core::Coord;
    use crate::parse_farm;
    use super::helpers::text;

    #[test]
    fn basic_farm() {
        let input = text(&[
            "2",
            "##start",
            "start 0 0",
            "middle 1 1",
            "##end",
            "end 2 2",
            "start-middle",
            "middle-end",
        ]);
        let parsed = parse_farm(&input).unwrap();
        assert_eq!(parsed.ant_count, 2);
        assert_eq!(parsed.farm.name(parsed.farm.source()), "start");
        assert_eq!(parsed.farm.name(parsed.farm.sink()), "end");
        assert_eq!(parsed.farm.room_count(), 3);
        assert_eq!(parsed.farm.tunnel_count(), 2);
        let middle = parsed.farm.room_id("middle").unwrap();
        assert_eq!(parsed.farm.coord(middle), Coord::new(1, 1));
    }

    #[test]
    fn comments_blank_lines_and_padding_are_ignored() {
        let input = "\n  3  \n# a comment\n##start\n  a 0 0\n\n#bad 0 0\n##end\nb 5 -2\n a-b \n";
        let parsed = parse_farm(input).unwrap();
        assert_eq!(parsed.ant_count, 3);
        assert_eq!(parsed.farm.room_count(), 2);
        let b = parsed.farm.room_id("b").unwrap();
        assert_eq!(parsed.farm.coord(b), Coord::new(5, -2));
    }

    #[test]
    fn crlf_line_endings() {
        let input = "1\r\n##start\r\na 0 0\r\n##end\r\nb 1 0\r\na-b\r\n";
        let parsed = parse_farm(input).unwrap();
        assert!(parsed.farm.are_linked(parsed.farm.source(), parsed.farm.sink()));
    }

    #[test]
    fn repeated_link_is_accepted() {
        let input = text(&["1", "##start", "a 0 0", "##end", "b 1 0", "a-b", "b-a", "a-b"]);
        let parsed = parse_farm(&input).unwrap();
        assert_eq!(parsed.farm.tunnel_count(), 1);
    }

    #[test]
    fn tab_separated_room() {
        let input = "1\n##start\na\t0\t0\n##end\nb 1 0\na-b";
        assert!(parse_farm(input).is_ok());
    }
}

// ── Rejected input ────────────────────────────────────────────────────────────

#[cfg(test)]
mod invalid {
    use lem_farm::FarmError;
    use crate::{ParseError, parse_farm};
    use super::helpers::text;

    #[test]
    fn empty_input() {
        assert!(matches!(parse_farm(""), Err(ParseError::EmptyInput)));
        assert!(matches!(parse_farm("   \n\n "), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn invalid_ant_counts() {
        for bad in ["0", "-1", "abc", "1.5", "##start"] {
            let input = text(&[bad, "##start", "a 0 0", "##end", "b 1 1", "a-b"]);
            assert!(
                matches!(parse_farm(&input), Err(ParseError::InvalidAntCount(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn ant_count_above_u32_range() {
        let input = text(&["4294967296", "##start", "a 0 0", "##end", "b 1 1", "a-b"]);
        let err = parse_farm(&input).unwrap_err();
        assert!(matches!(err, ParseError::TooManyAnts(ref n) if n == "4294967296"));
        assert!(err.to_string().contains("too many ants"));
    }

    #[test]
    fn ant_count_at_u32_max_is_accepted() {
        let input = text(&["4294967295", "##start", "a 0 0", "##end", "b 1 1", "a-b"]);
        assert_eq!(parse_farm(&input).unwrap().ant_count, u32::MAX);
    }

    #[test]
    fn self_link() {
        let input = text(&["1", "##start", "A 0 0", "##end", "B 1 1", "A-A"]);
        let err = parse_farm(&input).unwrap_err();
        assert!(matches!(err, ParseError::Farm { line: 6, source: FarmError::SelfLink(_) }));
    }

    #[test]
    fn duplicate_room() {
        let input = text(&["1", "##start", "A 0 0", "##end", "B 1 1", "A 0 0"]);
        let err = parse_farm(&input).unwrap_err();
        assert!(matches!(err, ParseError::Farm { source: FarmError::DuplicateRoom(_), .. }));
    }

    #[test]
    fn unknown_room_in_link() {
        let input = text(&["1", "##start", "A 0 0", "##end", "B 1 1", "A-C"]);
        let err = parse_farm(&input).unwrap_err();
        assert!(matches!(err, ParseError::Farm { source: FarmError::UnknownRoom(_), .. }));
    }

    #[test]
    fn link_before_room_definition() {
        let input = text(&["1", "##start", "A 0 0", "A-B", "##end", "B 1 1"]);
        let err = parse_farm(&input).unwrap_err();
        assert!(matches!(err, ParseError::Farm { line: 4, source: FarmError::UnknownRoom(_) }));
    }

    #[test]
    fn missing_start_and_end() {
        let input = text(&["1", "A 0 0", "B 1 1", "A-B"]);
        assert!(matches!(parse_farm(&input), Err(ParseError::MissingStart)));

        let input = text(&["1", "##start", "A 0 0", "B 1 1", "A-B"]);
        assert!(matches!(parse_farm(&input), Err(ParseError::MissingEnd)));
    }

    #[test]
    fn end_marker_with_no_room_after_it() {
        let input = text(&["1", "##start", "A 0 0", "B 1 1", "A-B", "##end"]);
        assert!(matches!(parse_farm(&input), Err(ParseError::MissingEnd)));
    }

    #[test]
    fn reserved_room_prefix() {
        let input = text(&["1", "##start", "L9 0 0", "##end", "B 1 1"]);
        let err = parse_farm(&input).unwrap_err();
        assert!(matches!(err, ParseError::InvalidRoomName { line: 3, ref name } if name == "L9"));
    }

    #[test]
    fn room_with_spaces_in_name() {
        let input = text(&["1", "##start", "A 0 0", "##end", "bad name 0 0", "B 1 1"]);
        assert!(matches!(parse_farm(&input), Err(ParseError::MalformedRoom { line: 5, .. })));
    }

    #[test]
    fn non_integer_coordinates() {
        let input = text(&["1", "##start", "A x 0", "##end", "B 1 1"]);
        assert!(matches!(parse_farm(&input), Err(ParseError::InvalidCoordinates { .. })));
    }

    #[test]
    fn malformed_link() {
        let input = text(&["1", "##start", "A 0 0", "##end", "B 1 1", "A-B-C"]);
        assert!(matches!(parse_farm(&input), Err(ParseError::MalformedLink { .. })));
    }

    #[test]
    fn unknown_line() {
        let input = text(&["1", "##start", "A 0 0", "##end", "B 1 1", "AB"]);
        assert!(matches!(parse_farm(&input), Err(ParseError::UnknownLine { line: 6, .. })));
    }

    #[test]
    fn one_room_flagged_as_both_terminals() {
        let input = text(&["1", "##start", "##end", "A 0 0", "B 1 1", "A-B"]);
        let err = parse_farm(&input).unwrap_err();
        assert!(matches!(err, ParseError::Farm { source: FarmError::SourceIsSink(_), .. }));
    }

    #[test]
    fn messages_use_invalid_data_format_wording() {
        let input = text(&["1", "##start", "A 0 0", "B 1 1", "A-B"]);
        let err = parse_farm(&input).unwrap_err();
        assert_eq!(err.to_string(), "invalid data format, missing ##end room");
    }
}

// ── Readers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod readers {
    use std::io::{Cursor, Write};

    use crate::{ParseError, load_farm, load_farm_reader};

    const FARM: &str = "1\n##start\na 0 0\n##end\nb 1 0\na-b\n";

    #[test]
    fn from_cursor() {
        let parsed = load_farm_reader(Cursor::new(FARM)).unwrap();
        assert_eq!(parsed.ant_count, 1);
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FARM.as_bytes()).unwrap();
        let parsed = load_farm(file.path()).unwrap();
        assert_eq!(parsed.farm.room_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_farm(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
