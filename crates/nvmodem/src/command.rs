//! The wake-pattern command grammar.
//!
//! A command is one line of ASCII text in one of two shapes:
//!
//! - `<index>` — clear the pattern slot at `index`.
//! - `<index> <offset> <pattern>` — install a pattern. The pattern is the
//!   entire remainder of the line and may contain further delimiters; its
//!   internal structure is opaque to this crate.
//!
//! Numeric fields decode per [`decode_u8`](crate::decode_u8). The last byte
//! of the pattern payload is always stripped before delivery: the writing
//! side terminates every command with one extra byte (in practice a
//! newline), and that terminator is not part of the pattern.

use core::fmt;

use bstr::BStr;

use crate::{
    decode::decode_u8,
    error::{CommandError, ParseError},
    splitter::TokenSplitter,
};

/// Maximum accepted length of one command, in bytes.
pub const MAX_COMMAND_SIZE: usize = 512;

/// A fully decoded wake-pattern command.
///
/// The delete form carries only the slot index; offset and payload exist
/// only on the add form, so a half-built add command is unrepresentable.
/// Payloads borrow from the parsed input and are meant to be consumed
/// immediately.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PatternCommand<'src> {
    /// Install the pattern carried in the payload.
    Add {
        /// Pattern slot to install into.
        index: u8,
        /// Byte offset within the frame the pattern is matched at.
        offset: u8,
        /// Raw pattern payload, internal delimiters included, trailing
        /// terminator stripped.
        pattern: &'src [u8],
    },
    /// Clear whatever pattern occupies the slot.
    Delete {
        /// Pattern slot to clear.
        index: u8,
    },
}

impl fmt::Debug for PatternCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add {
                index,
                offset,
                pattern,
            } => f
                .debug_struct("Add")
                .field("index", index)
                .field("offset", offset)
                .field("pattern", &BStr::new(pattern))
                .finish(),
            Self::Delete { index } => f.debug_struct("Delete").field("index", index).finish(),
        }
    }
}

/// Parser for the textual wake-pattern command grammar.
///
/// The parser is a pure computation over the input slice: it performs no
/// I/O, calls no handlers, and keeps no state between calls, so one value
/// may serve any number of threads as long as each call brings its own
/// input. Dispatching the decoded command is the embedding system's job
/// (see [`PatternSink`](crate::PatternSink)).
#[derive(Debug, Clone, Copy)]
pub struct CommandParser {
    delimiter: u8,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Creates a parser for the standard space-delimited grammar.
    #[must_use]
    pub const fn new() -> Self {
        Self { delimiter: b' ' }
    }

    /// Creates a parser splitting fields on `delimiter` instead of spaces.
    #[must_use]
    pub const fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Decodes one command from `input`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::OutOfBounds`] if `input` exceeds
    ///   [`MAX_COMMAND_SIZE`].
    /// - [`ParseError::InvalidCommand`] if a required field is missing or
    ///   fails to decode. No partial command is ever produced.
    pub fn parse<'src>(&self, input: &'src [u8]) -> Result<PatternCommand<'src>, ParseError> {
        if input.len() > MAX_COMMAND_SIZE {
            return Err(ParseError::OutOfBounds {
                requested: input.len(),
                available: MAX_COMMAND_SIZE,
            });
        }

        let mut tokens = TokenSplitter::with_delimiter(input, self.delimiter);

        let index = match tokens.next_token() {
            None => return Err(CommandError::MissingIndex.into()),
            Some(token) => decode_u8(token)?,
        };

        let offset = match tokens.next_token() {
            None => return Ok(PatternCommand::Delete { index }),
            Some(token) => decode_u8(token)?,
        };

        let payload = tokens.rest().ok_or(CommandError::MissingPattern)?;
        let pattern = trim_terminator(payload)?;

        Ok(PatternCommand::Add {
            index,
            offset,
            pattern,
        })
    }
}

/// Drops the single trailing terminator byte from a pattern payload.
///
/// The payload must be non-empty; an empty one means the offset was the last
/// field on the line and no pattern followed it.
fn trim_terminator(payload: &[u8]) -> Result<&[u8], ParseError> {
    match payload {
        [] => Err(CommandError::MissingPattern.into()),
        [head @ .., _] => Ok(head),
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandParser, PatternCommand};

    #[test]
    fn debug_renders_pattern_as_text() {
        let parser = CommandParser::new();
        let command = parser.parse(b"3 5 hello\n").unwrap();
        assert_eq!(
            std::format!("{command:?}"),
            "Add { index: 3, offset: 5, pattern: \"hello\" }"
        );
    }

    #[test]
    fn colon_delimited_grammar() {
        let parser = CommandParser::with_delimiter(b':');
        assert_eq!(
            parser.parse(b"1:2:ab cd\n").unwrap(),
            PatternCommand::Add {
                index: 1,
                offset: 2,
                pattern: b"ab cd",
            }
        );
        assert_eq!(
            parser.parse(b"9").unwrap(),
            PatternCommand::Delete { index: 9 }
        );
    }
}
