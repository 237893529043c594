//! Custom error types for the id3-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum Id3Error {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A structure declared more bytes than the buffer actually holds.
    #[error(
        "Truncated buffer while reading {context} at offset {offset}: \
         needed {needed} bytes, but only {available} remain"
    )]
    TruncatedBuffer {
        context: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Fewer than 4 bytes were handed to the syncsafe decoder.
    #[error("Syncsafe field requires 4 bytes, but only {available} were supplied")]
    MalformedSyncsafeInput { available: usize },
}

/// A convenience `Result` type alias using the crate's `Id3Error` type.
pub type Result<T> = std::result::Result<T, Id3Error>;
