//! Decoder error types.

use std::fmt;

/// Errors reported by query-string decoding and collection access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `%XX` escape whose digits are not hexadecimal.
    InvalidEscape {
        /// Byte offset of the `%` within the source query string.
        index: usize,
    },

    /// A `%` escape cut off by the end of the input.
    TruncatedEscape {
        /// Byte offset of the `%` within the source query string.
        index: usize,
    },

    /// Positional access outside `[0, len)`.
    OutOfRange { index: usize, len: usize },

    /// Cursor advanced past the last entry.
    IteratorExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEscape { index } => {
                write!(f, "invalid percent escape at byte {}", index)
            }
            Error::TruncatedEscape { index } => {
                write!(f, "truncated percent escape at byte {}", index)
            }
            Error::OutOfRange { index, len } => {
                write!(f, "index {} out of range for {} entries", index, len)
            }
            Error::IteratorExhausted => write!(f, "iterator exhausted"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for decoder operations.
pub type Result<T> = std::result::Result<T, Error>;
