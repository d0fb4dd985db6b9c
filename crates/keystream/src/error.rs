//! Stream error types

use thiserror::Error;

/// Errors raised while writing keys or keysets to a sink
#[derive(Debug, Error)]
pub enum StreamError {
    /// The resolved (full) form of a key name does not fit the path limit
    #[error("resolved name of {name:?} is {len} bytes, limit is {max}")]
    NameTooLong {
        /// Raw stored name of the key
        name: String,
        /// Length of the resolved name including terminator
        len: usize,
        /// Maximum accepted length including terminator
        max: usize,
    },

    /// The sink rejected a write
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
