//! Error types for buffered binary reading

use std::io;
use thiserror::Error;

/// Result type alias for reader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by [`BufferedBinaryReader`](crate::BufferedBinaryReader)
///
/// None of these are retried internally. After any error the reader's cursors
/// are not guaranteed to match the source, so the reader should be dropped.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error raised by the underlying byte source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured maximum read size cannot back a staging buffer
    #[error("Invalid max read size: {0} (must be non-zero and fit twice in memory)")]
    InvalidMaxReadSize(usize),

    /// A single request asked for more contiguous bytes than the reader guarantees
    #[error("Request of {requested} bytes exceeds max read size of {max} bytes")]
    RequestTooLarge {
        /// Number of bytes requested
        requested: usize,
        /// Configured maximum read size
        max: usize,
    },

    /// The byte source ran out of data while a request still needed bytes
    #[error("Byte source exhausted with {needed} bytes still needed")]
    SourceExhausted {
        /// Bytes of the pending request that could not be fetched
        needed: usize,
    },
}

impl Error {
    /// Check if this error stems from the reader's configuration rather than the data
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidMaxReadSize(_) | Error::RequestTooLarge { .. }
        )
    }

    /// Check if this error indicates the source ended before a request was satisfied
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::SourceExhausted { .. })
    }
}
