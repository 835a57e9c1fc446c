// nfcvault/src/session/operations/mod.rs

//! Chunked buffer operations on a selected session.

pub mod length;
pub mod read;
pub mod verify;
pub mod write;

pub use length::get_length;
pub use read::read;
pub(crate) use length::decode_length;
pub(crate) use read::check_read_payload;
pub use verify::{Mismatch, compare};
pub use write::write;

use crate::session::{Selected, VaultSession};
use crate::transport::Transport;
use crate::Result;

/// Outcome of a completed transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferReport {
    /// Payload bytes acknowledged by the card.
    pub bytes: usize,
    /// APDU exchanges performed.
    pub chunks: usize,
}

impl<T: Transport> VaultSession<T, Selected> {
    /// Write `data` at `offset`, one chunk per exchange in ascending order.
    ///
    /// Stops at the first failing chunk. Chunks already acknowledged stay
    /// written: after an error the buffer from the failing offset onward is
    /// in an indeterminate, partially updated state.
    pub fn write(&mut self, offset: u16, data: &[u8]) -> Result<TransferReport> {
        write::write(self, offset, data)
    }

    /// Read `len` bytes from `offset`. Either the whole range comes back or
    /// an error does; partial data is never returned.
    pub fn read(&mut self, offset: u16, len: usize) -> Result<Vec<u8>> {
        read::read(self, offset, len)
    }

    /// Number of bytes the applet reports as holding data.
    pub fn get_length(&mut self) -> Result<u16> {
        length::get_length(self)
    }

    /// Read back `expected.len()` bytes at `offset` and compare them.
    /// `Ok(None)` means every byte matched.
    pub fn verify(&mut self, offset: u16, expected: &[u8]) -> Result<Option<Mismatch>> {
        let actual = self.read(offset, expected.len())?;
        Ok(compare(offset, expected, &actual))
    }
}
