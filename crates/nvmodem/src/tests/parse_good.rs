use alloc::vec::Vec;

use crate::{
    CommandParser, DispatchError, MAX_COMMAND_SIZE, PatternCommand, PatternSink, StreamCursor,
    parse_and_dispatch,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Added {
        index: u8,
        offset: u8,
        pattern: Vec<u8>,
    },
    Deleted {
        index: u8,
    },
}

/// Sink that records every action, or rejects everything when primed.
#[derive(Debug, Default)]
struct Recorder {
    events: Vec<Event>,
    reject_with: Option<&'static str>,
}

impl PatternSink for Recorder {
    type Error = &'static str;

    fn add_pattern(&mut self, index: u8, offset: u8, pattern: &[u8]) -> Result<(), Self::Error> {
        if let Some(reason) = self.reject_with {
            return Err(reason);
        }
        self.events.push(Event::Added {
            index,
            offset,
            pattern: pattern.to_vec(),
        });
        Ok(())
    }

    fn delete_pattern(&mut self, index: u8) -> Result<(), Self::Error> {
        if let Some(reason) = self.reject_with {
            return Err(reason);
        }
        self.events.push(Event::Deleted { index });
        Ok(())
    }
}

#[test]
fn add_command_strips_one_trailing_byte() {
    let parser = CommandParser::new();
    assert_eq!(
        parser.parse(b"3 5 helloX").unwrap(),
        PatternCommand::Add {
            index: 3,
            offset: 5,
            pattern: b"hello",
        }
    );
    assert_eq!(
        parser.parse(b"3 5 hello\n").unwrap(),
        PatternCommand::Add {
            index: 3,
            offset: 5,
            pattern: b"hello",
        }
    );
}

#[test]
fn delete_command_is_index_only() {
    let parser = CommandParser::new();
    assert_eq!(
        parser.parse(b"7").unwrap(),
        PatternCommand::Delete { index: 7 }
    );
    assert_eq!(
        parser.parse(b"0").unwrap(),
        PatternCommand::Delete { index: 0 }
    );
    assert_eq!(
        parser.parse(b"255").unwrap(),
        PatternCommand::Delete { index: 255 }
    );
}

#[test]
fn pattern_keeps_internal_delimiters() {
    let parser = CommandParser::new();
    assert_eq!(
        parser.parse(b"1 2 de ad be ef\n").unwrap(),
        PatternCommand::Add {
            index: 1,
            offset: 2,
            pattern: b"de ad be ef",
        }
    );
}

#[test]
fn single_byte_payload_strips_to_empty_pattern() {
    let parser = CommandParser::new();
    assert_eq!(
        parser.parse(b"1 2 \n").unwrap(),
        PatternCommand::Add {
            index: 1,
            offset: 2,
            pattern: b"",
        }
    );
}

#[test]
fn fields_accept_hex_and_octal() {
    let parser = CommandParser::new();
    assert_eq!(
        parser.parse(b"0x0a 017 fff\n").unwrap(),
        PatternCommand::Add {
            index: 10,
            offset: 15,
            pattern: b"fff",
        }
    );
    assert_eq!(
        parser.parse(b"0xFF").unwrap(),
        PatternCommand::Delete { index: 255 }
    );
}

#[test]
fn input_at_the_size_cap_is_accepted() {
    let mut input = Vec::from(&b"4 0 "[..]);
    input.resize(MAX_COMMAND_SIZE, b'a');
    let command = CommandParser::new().parse(&input).unwrap();
    assert_eq!(
        command,
        PatternCommand::Add {
            index: 4,
            offset: 0,
            pattern: &input[4..MAX_COMMAND_SIZE - 1],
        }
    );
}

#[test]
fn chunked_write_session_parses_from_the_cursor() {
    // A transport handing the command over in two pieces, the way a write
    // handler might see it.
    let mut cursor = StreamCursor::with_capacity(MAX_COMMAND_SIZE);
    cursor.write_chunk(b"12 34 ").unwrap();
    cursor.write_chunk(b"cafe\n").unwrap();
    cursor.rewind();

    let parser = CommandParser::new();
    assert_eq!(
        parser.parse(cursor.unread()).unwrap(),
        PatternCommand::Add {
            index: 12,
            offset: 34,
            pattern: b"cafe",
        }
    );
}

#[test]
fn dispatch_routes_to_the_matching_handler() {
    let parser = CommandParser::new();
    let mut sink = Recorder::default();

    parse_and_dispatch(&parser, b"3 5 hello\n", &mut sink).unwrap();
    parse_and_dispatch(&parser, b"9", &mut sink).unwrap();

    assert_eq!(
        sink.events,
        [
            Event::Added {
                index: 3,
                offset: 5,
                pattern: b"hello".to_vec(),
            },
            Event::Deleted { index: 9 },
        ]
    );
}

#[test]
fn sink_errors_pass_through_unchanged() {
    let parser = CommandParser::new();
    let mut sink = Recorder {
        reject_with: Some("no free pattern slot"),
        ..Recorder::default()
    };

    let err = parse_and_dispatch(&parser, b"3 5 hello\n", &mut sink).unwrap_err();
    assert_eq!(err, DispatchError::Sink("no free pattern slot"));
}

#[test]
fn parse_failures_never_reach_the_sink() {
    let parser = CommandParser::new();
    let mut sink = Recorder::default();

    let err = parse_and_dispatch(&parser, b"bogus", &mut sink).unwrap_err();
    assert!(matches!(err, DispatchError::Parse(_)));
    assert!(sink.events.is_empty());
}
