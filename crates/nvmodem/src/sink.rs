//! The dispatch seam between decoded commands and the embedding system.

use core::fmt;

use crate::{
    command::{CommandParser, PatternCommand},
    error::ParseError,
};

/// Receiver for validated wake-pattern commands.
///
/// The embedding system implements this to install and remove patterns in
/// whatever store backs them; errors raised here pass through
/// [`parse_and_dispatch`] unchanged. Serializing access to that store is the
/// implementor's responsibility.
pub trait PatternSink {
    /// Error type raised by the sink's handlers.
    type Error;

    /// Installs `pattern` at byte offset `offset` in slot `index`.
    ///
    /// # Errors
    ///
    /// Whatever the implementor's store reports, e.g. no free slot.
    fn add_pattern(&mut self, index: u8, offset: u8, pattern: &[u8]) -> Result<(), Self::Error>;

    /// Clears slot `index`.
    ///
    /// # Errors
    ///
    /// Whatever the implementor's store reports, e.g. no such pattern.
    fn delete_pattern(&mut self, index: u8) -> Result<(), Self::Error>;
}

impl PatternCommand<'_> {
    /// Forwards this command to the matching sink handler.
    ///
    /// # Errors
    ///
    /// Returns the sink's own error unchanged.
    pub fn dispatch<S: PatternSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        match *self {
            Self::Add {
                index,
                offset,
                pattern,
            } => sink.add_pattern(index, offset, pattern),
            Self::Delete { index } => sink.delete_pattern(index),
        }
    }
}

/// Outcome of [`parse_and_dispatch`] when something went wrong: either the
/// command never decoded, or the sink rejected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError<E> {
    /// The command failed to parse and never reached the sink.
    Parse(ParseError),
    /// The sink rejected the decoded command.
    Sink(E),
}

impl<E> From<ParseError> for DispatchError<E> {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl<E: fmt::Display> fmt::Display for DispatchError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => err.fmt(f),
            Self::Sink(err) => err.fmt(f),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for DispatchError<E> {}

/// Decodes one command from `input` and forwards it to `sink` in one step.
///
/// # Errors
///
/// [`DispatchError::Parse`] if the command fails to decode (the sink is
/// never called), [`DispatchError::Sink`] if the sink rejects it.
pub fn parse_and_dispatch<S: PatternSink>(
    parser: &CommandParser,
    input: &[u8],
    sink: &mut S,
) -> Result<(), DispatchError<S::Error>> {
    let command = parser.parse(input)?;
    command.dispatch(sink).map_err(DispatchError::Sink)
}
