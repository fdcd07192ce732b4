#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nvmodem::{CommandParser, MAX_COMMAND_SIZE, PatternCommand, StreamCursor};

/// One fuzz case: a raw command line plus a chunked write session replaying
/// the same bytes through a cursor.
#[derive(Debug, Arbitrary)]
struct Case {
    line: Vec<u8>,
    chunk_sizes: Vec<u8>,
}

fn run(case: &Case) {
    let parser = CommandParser::new();

    // Parsing is total: any input yields a command or a typed error, and a
    // decoded payload is always a strict sub-slice of the input.
    match parser.parse(&case.line) {
        Ok(PatternCommand::Add { pattern, .. }) => {
            assert!(case.line.len() <= MAX_COMMAND_SIZE);
            assert!(pattern.len() < case.line.len());
        }
        Ok(PatternCommand::Delete { .. }) => {
            assert!(case.line.len() <= MAX_COMMAND_SIZE);
        }
        Err(_) => {}
    }

    // Writing the same line through a cursor in arbitrary chunks and reading
    // it back must reproduce it exactly, regardless of the chunking.
    let mut cursor = StreamCursor::with_capacity(case.line.len());
    let mut fed = 0;
    for &size in &case.chunk_sizes {
        let size = usize::from(size).min(case.line.len() - fed);
        cursor
            .write_chunk(&case.line[fed..fed + size])
            .expect("write within capacity");
        fed += size;
    }
    cursor
        .write_chunk(&case.line[fed..])
        .expect("write within capacity");
    cursor.rewind();
    assert_eq!(cursor.unread(), case.line.as_slice());

    let replayed = cursor
        .read_chunk(case.line.len())
        .expect("read what was written");
    assert_eq!(replayed, case.line.as_slice());
}

fuzz_target!(|case: Case| run(&case));
