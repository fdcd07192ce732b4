//! Streaming parsers for wake-on-wireless-LAN pattern commands and
//! non-volatile configuration streams.
//!
//! The crate models two small wire surfaces of a wireless stack's host
//! driver as ordinary, reusable parsing primitives:
//!
//! - [`StreamCursor`] — bounds-checked sequential read/write over an owned,
//!   capacity-capped byte buffer, one cursor per session.
//! - [`TokenSplitter`] — forward-only, zero-copy tokenization of delimited
//!   command text.
//! - [`decode_u8`] — strict numeric field decoding with `0x`/`0` base
//!   auto-detection.
//! - [`ParseControlFlags`] — the two policy bits a stream consumer honors
//!   for mismatching and trailing entries.
//! - [`CommandParser`] — the add/delete wake-pattern command grammar,
//!   producing a [`PatternCommand`] that the embedding system feeds to its
//!   own [`PatternSink`].
//!
//! Everything is a pure computation over in-memory buffers: no I/O, no
//! global state, and every error returns immediately to the caller as a
//! typed [`ParseError`].
//!
//! ```rust
//! use nvmodem::{CommandParser, PatternCommand};
//!
//! let parser = CommandParser::new();
//!
//! let add = parser.parse(b"3 5 hello\n").unwrap();
//! assert_eq!(
//!     add,
//!     PatternCommand::Add {
//!         index: 3,
//!         offset: 5,
//!         pattern: b"hello",
//!     }
//! );
//!
//! let delete = parser.parse(b"7").unwrap();
//! assert_eq!(delete, PatternCommand::Delete { index: 7 });
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod command;
mod cursor;
mod decode;
mod error;
mod flags;
mod sink;
mod splitter;

#[cfg(test)]
mod tests;

pub use command::{CommandParser, MAX_COMMAND_SIZE, PatternCommand};
pub use cursor::StreamCursor;
pub use decode::decode_u8;
pub use error::{CommandError, DecodeError, ParseError};
pub use flags::ParseControlFlags;
pub use sink::{DispatchError, PatternSink, parse_and_dispatch};
pub use splitter::TokenSplitter;
