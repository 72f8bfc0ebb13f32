use std::{fmt, io};
use thiserror::Error;

/// Unified error type for all ordkey operations.
///
/// Errors propagate upward through the call stack with Rust's `?` operator.
/// Decoders never panic on malformed input; every failure mode is a value of
/// this enum.
///
/// `Error` implements `Send` and `Sync`, so failures can cross thread
/// boundaries freely.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from a downstream writer.
    ///
    /// The codecs themselves append into in-memory buffers and cannot fail
    /// this way; the variant exists so that sinks flushing encoded keys to
    /// storage can surface their failures through the same enum.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not contain enough bytes to decode a value.
    ///
    /// Every codec in the family is fixed-width, so a reader positioned at a
    /// frame boundary either yields a full frame or this error.
    #[error("not enough bytes in input")]
    NotEnoughData,

    /// Decoded bytes are not a valid key for the target type.
    ///
    /// Only the ordinal codec produces this today (a decoded ordinal outside
    /// its variant table). The reader position is unspecified afterwards;
    /// callers must discard the stream.
    #[error("corrupt key: {0}")]
    CorruptKey(String),

    /// Invalid user input or API parameter.
    ///
    /// Examples: constructing an ordinal table that does not fit the 2-byte
    /// wire format, or encoding a variant the table does not contain.
    ///
    /// # Recovery
    ///
    /// These errors are recoverable—fix the input and retry the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// The provided value does not match the requested key type.
    ///
    /// Produced by the runtime-tagged dispatch surface when a value union is
    /// paired with the wrong type tag.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

impl Error {
    /// Create a corrupt-key error from any displayable error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkey_result::Error;
    ///
    /// fn check_ordinal(i: u16, n: usize) -> Result<(), Error> {
    ///     if (i as usize) < n {
    ///         Ok(())
    ///     } else {
    ///         Err(Error::corrupt_key(format!("ordinal {i} out of range")))
    ///     }
    /// }
    ///
    /// assert!(matches!(check_ordinal(3, 2), Err(Error::CorruptKey(_))));
    /// ```
    #[inline]
    pub fn corrupt_key<E: fmt::Display>(err: E) -> Self {
        Error::CorruptKey(err.to_string())
    }

    /// Create an invalid-argument error from any displayable error.
    ///
    /// Convenience for encode-side precondition failures while preserving
    /// the original error message.
    #[inline]
    pub fn invalid_argument<E: fmt::Display>(err: E) -> Self {
        Error::InvalidArgumentError(err.to_string())
    }
}
