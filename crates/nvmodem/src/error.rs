use thiserror::Error;

/// Errors surfaced while parsing a command or stepping a stream cursor.
///
/// The taxonomy is closed: every failure in this crate is either a bounds
/// violation on the underlying buffer or a malformed command, and both are
/// fatal to the current parse attempt. Mapping onto transport-specific codes
/// (e.g. a negative errno returned from a write handler) is the embedding
/// system's job.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A read or write would cross the end of the stream buffer.
    #[error("stream access out of bounds: requested {requested} bytes, {available} available")]
    OutOfBounds {
        /// Number of bytes the operation asked for.
        requested: usize,
        /// Number of bytes actually available at the cursor position.
        available: usize,
    },

    /// The command text is missing a required field or a field failed to
    /// decode.
    #[error("invalid command: {0}")]
    InvalidCommand(#[from] CommandError),
}

/// Ways a pattern command can be malformed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The command is empty where a pattern index was required.
    #[error("missing pattern index")]
    MissingIndex,
    /// An offset was given but no pattern payload followed it.
    #[error("missing pattern payload")]
    MissingPattern,
    /// A numeric field failed to decode.
    #[error("{0}")]
    Field(#[from] DecodeError),
}

/// Ways a token can fail to decode as an unsigned 8-bit value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The token is empty, or a base prefix has no digits after it.
    #[error("empty numeric field")]
    Empty,
    /// The token contains a byte that is not a digit of the detected base.
    #[error("invalid digit {0:#04x} in numeric field")]
    InvalidDigit(u8),
    /// The value does not fit in eight bits.
    #[error("numeric field value exceeds 255")]
    Overflow,
}

impl From<DecodeError> for ParseError {
    fn from(err: DecodeError) -> Self {
        Self::InvalidCommand(CommandError::Field(err))
    }
}
