//! Error type shared by the reader, the writer and the buffers behind them.

use thiserror::Error;

/// Errors produced while encoding or decoding.
///
/// Every error is reported at the point of failure. Nothing is retried, and bytes that were
/// already consumed or written before the failure are not rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// A read needed `needed` bytes, but only `available` bytes were buffered after pulling
    /// from the source once.
    #[error("insufficient data: needed {needed} bytes, {available} available")]
    InsufficientData {
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes that were buffered.
        available: usize,
    },

    /// A write into a fixed-capacity buffer would run past its end.
    #[error("write of {len} bytes at offset {offset} is out of bounds of buffer (capacity {capacity})")]
    OutOfBounds {
        /// Write offset at the time of the failed write.
        offset: usize,
        /// Length of the rejected chunk.
        len: usize,
        /// Capacity of the buffer.
        capacity: usize,
    },

    /// A value cannot be represented in the requested encoding.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected value.
        message: String,
    },

    /// Decoded bytes are malformed, such as a string that is not valid UTF-8.
    #[error("invalid data: {message}")]
    InvalidData {
        /// Description of the malformed data.
        message: String,
    },

    /// Error reported by a `std::io` backed source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cold]
pub(crate) const fn insufficient_data(needed: usize, available: usize) -> Error {
    Error::InsufficientData { needed, available }
}

#[cold]
pub(crate) const fn out_of_bounds(offset: usize, len: usize, capacity: usize) -> Error {
    Error::OutOfBounds {
        offset,
        len,
        capacity,
    }
}

#[cold]
pub(crate) fn invalid_input(message: impl Into<String>) -> Error {
    Error::InvalidInput {
        message: message.into(),
    }
}

#[cold]
pub(crate) fn invalid_data(message: impl Into<String>) -> Error {
    Error::InvalidData {
        message: message.into(),
    }
}
