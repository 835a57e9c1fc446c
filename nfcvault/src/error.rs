// nfcvault/src/error.rs

use crate::types::{Operation, StatusWord};
use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// The addressed range lies outside the Vault buffer. Either the card
    /// answered 0x6A82 or the session's capacity preflight rejected it.
    #[error("{operation} out of bounds: offset {offset}, length {length}")]
    OutOfBounds {
        operation: Operation,
        offset: u16,
        length: usize,
    },

    #[error("{operation} rejected at offset {offset}: status={status}")]
    Status {
        operation: Operation,
        offset: u16,
        status: StatusWord,
    },

    /// Transport failure in the middle of a chunked operation. `offset` is
    /// the chunk that failed, `completed` the bytes confirmed before it.
    #[error("{operation} exchange failed at offset {offset} after {completed} bytes: {source}")]
    Exchange {
        operation: Operation,
        offset: u16,
        completed: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("{operation} cancelled at offset {offset}")]
    Cancelled { operation: Operation, offset: u16 },

    #[error("{operation} at offset {offset}: expected {expected} payload bytes, got {actual}")]
    UnexpectedPayload {
        operation: Operation,
        offset: u16,
        expected: usize,
        actual: usize,
    },

    #[error("range not addressable with 16-bit offsets: offset {offset}, length {length}")]
    OffsetOverflow { offset: u16, length: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("no response from card")]
    NoResponse,

    #[error("operation timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Link(String),
}

impl Error {
    /// Transport-level failures that a caller-side retry policy may try
    /// again. Card status words never qualify.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Timeout | Error::NoResponse)
    }

    /// Offset the failure refers to, when it happened inside a Vault
    /// operation.
    pub fn offset(&self) -> Option<u16> {
        match self {
            Error::OutOfBounds { offset, .. }
            | Error::Status { offset, .. }
            | Error::Exchange { offset, .. }
            | Error::Cancelled { offset, .. }
            | Error::UnexpectedPayload { offset, .. }
            | Error::OffsetOverflow { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
